mod build_tests;
