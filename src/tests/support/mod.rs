pub mod app_state_builder;
