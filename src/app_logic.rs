/*
 * This module provides the application logic layer for the General settings
 * page, centered around `GeneralViewModel`, which owns the settings snapshot and
 * drives the persist-and-notify cycle. The button actions live in `commands`.
 * Unit tests for `GeneralViewModel` are in `general_view_model_tests.rs`.
 */
pub mod commands;
pub mod constants;
pub mod general_view_model;


pub use commands::ButtonClickCommand;
pub use general_view_model::GeneralViewModel;
