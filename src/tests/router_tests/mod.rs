mod dashboard_tests;
mod download_tests;
mod search_tests;
