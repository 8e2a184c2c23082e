mod header_filter_tests;
mod map_builder_tests;
