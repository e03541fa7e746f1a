mod aggregate_tests;
mod stats_tests;
