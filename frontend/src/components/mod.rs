//! UI Components for PIX Portal.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the logged-in user
//! - [`Footer`] - Page footer
//! - [`ProjectNav`] - Project breadcrumb with the upload entry point
//! - [`Toasts`] - Error and success notifications
//!
//! # Feature Components
//! - [`DragAndDropForm`] - Asset upload with drag & drop
//! - [`ColumnMappingDialog`] - Event-log column mapping
//! - [`UploadAssetDialog`] - Modal around the upload form
//! - [`AssetList`] - Assets of a project
//! - [`ProjectCard`], [`ProcessingCard`] - Navigation cards
//! - [`ProcessingSetup`] - Input selection for a processing job
//! - [`RequireSession`] - Route guard

mod asset_list;
mod column_mapping;
mod footer;
mod guard;
mod header;
mod processing_card;
mod processing_setup;
mod project_card;
mod project_nav;
mod toast;
mod upload_dialog;
mod upload_form;

pub use asset_list::*;
pub use column_mapping::*;
pub use footer::*;
pub use guard::*;
pub use header::*;
pub use processing_card::*;
pub use processing_setup::*;
pub use project_card::*;
pub use project_nav::*;
pub use toast::*;
pub use upload_dialog::*;
pub use upload_form::*;
