
mod cache_tests;
