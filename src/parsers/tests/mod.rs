mod description_tests;
mod listing_tests;
mod text_tests;
