pub mod advice_controller;

pub use advice_controller::AdviceController;
