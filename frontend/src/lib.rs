//! PIX Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for the PIX process-improvement platform: log in,
//! browse projects, upload assets (event logs, BPMN process models,
//! simulation parameters) and start processing jobs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  SessionContext + Toaster (provided at the root)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /login            LoginPage                                 │
//! │  /logout           LogoutPage                                │
//! │  RequireSession                                              │
//! │  ├── /projects                  ProjectsPage                 │
//! │  └── /projects/:project_id      ProjectPage                  │
//! │      │   ├── ProjectNav → UploadAssetDialog → DragAndDropForm│
//! │      │   └── AssetList, ProcessingCards                      │
//! │      └── :processing_type       ProcessingPage               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`upload`] - Upload form state machine and per-asset-type contract
//! - [`types`] - Domain types (Project, Asset, ProcessingType) and errors
//! - [`session`] - Browser-side session and redirects
//! - [`components`] - UI components
//! - [`pages`] - Routed pages
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod upload;
pub mod session;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Domain
    Asset, Project, User,
    // Processing
    ProcessingType,
    // Errors
    AppError, AppResult,
};

// Upload
pub use upload::{AssetType, ColumnMapping, SlotKind, UploadForm};

// Session
pub use session::{Session, SessionContext};

// Components & pages
pub use components::*;
pub use pages::*;

// =============================================================================
// Application
// =============================================================================

/// Root component; mounted by the `pix-frontend` binary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    SessionContext::provide();
    Toaster::provide();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Toasts/>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path=DEFAULT_REDIRECT/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/logout" view=LogoutPage/>
                    <Route path="" view=RequireSession>
                        <Route path="/projects" view=ProjectsPage/>
                        <Route path="/projects/:project_id" view=ProjectPage>
                            <Route path=":processing_type" view=ProcessingPage/>
                            <Route path="" view=|| ()/>
                        </Route>
                    </Route>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
