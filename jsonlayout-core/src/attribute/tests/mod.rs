mod catalogue_tests;
mod set_tests;
