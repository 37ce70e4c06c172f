//! Core library modules for the taskeep application.
//!
//! - **Data Model**: Task records, patches, filter and sort values
//! - **View State**: The in-memory cache and the pure render input
//! - **User Interface**: Console table rendering and date formatting
//! - **Infrastructure**: Data directory resolution, messaging

pub mod data_storage;
pub mod messages;
pub mod state;
pub mod task;
pub mod view;
