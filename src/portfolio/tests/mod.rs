pub(crate) mod valuation_tests;
