mod dashboard_tests;
mod properties_tests;
