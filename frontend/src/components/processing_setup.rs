//! Setup panel of a processing page.
//!
//! Each processing type takes one asset per required asset type. The panel
//! lets the user choose them among the project's assets and starts the job.

use leptos::*;

use crate::components::{report_error, Toaster};
use crate::services::create_processing_request;
use crate::session::SessionContext;
use crate::types::{Asset, ProcessingType};
use crate::upload::AssetType;

/// Preselect the most recent asset of each required type.
fn default_selection(required: &[AssetType], assets: &[Asset]) -> Vec<Option<String>> {
    required
        .iter()
        .map(|t| {
            assets
                .iter()
                .filter(|a| a.asset_type == *t)
                .max_by(|a, b| a.creation_time.cmp(&b.creation_time))
                .map(|a| a.id.clone())
        })
        .collect()
}

/// Asset ids to send, once every input is chosen.
fn input_assets(selection: &[Option<String>]) -> Option<Vec<String>> {
    selection.iter().cloned().collect()
}

#[component]
pub fn ProcessingSetup(
    project_id: String,
    processing_type: ProcessingType,
    assets: Vec<Asset>,
) -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();

    let required = processing_type.required_assets();
    let selection = create_rw_signal(default_selection(required, &assets));
    let (starting, set_starting) = create_signal(false);
    let can_start = move || !starting.get() && selection.with(|s| input_assets(s).is_some());

    let on_start = move |_: ev::MouseEvent| {
        let Some(inputs) = selection.with_untracked(|s| input_assets(s)) else {
            return;
        };
        let Some((user_id, token)) = session
            .session
            .with_untracked(|s| s.as_ref().map(|s| (s.user.id.clone(), s.token.clone())))
        else {
            return;
        };
        let project_id = project_id.clone();

        set_starting.set(true);
        spawn_local(async move {
            match create_processing_request(processing_type, &user_id, &project_id, inputs, &token).await {
                Ok(request) => toaster.success(format!(
                    "{} started (request {})",
                    processing_type.label(),
                    request.id
                )),
                Err(e) => report_error(toaster, session, e),
            }
            set_starting.set(false);
        });
    };

    view! {
        <section class="processing-setup">
            <h2>{processing_type.label()}</h2>
            <p class="processing-description">{processing_type.description()}</p>

            {required
                .iter()
                .enumerate()
                .map(|(slot, asset_type)| {
                    let options: Vec<Asset> = assets
                        .iter()
                        .filter(|a| a.asset_type == *asset_type)
                        .cloned()
                        .collect();
                    let empty = options.is_empty();
                    view! {
                        <label class="processing-input">
                            <span>{asset_type.label()}</span>
                            <select
                                disabled=empty
                                on:change=move |ev| {
                                    let id = event_target_value(&ev);
                                    selection.update(|s| s[slot] = (!id.is_empty()).then_some(id));
                                }
                            >
                                <option value="">"Select an asset"</option>
                                {options
                                    .into_iter()
                                    .map(|asset| {
                                        let id = asset.id.clone();
                                        view! {
                                            <option
                                                value=asset.id
                                                selected=move || selection.with(|s| s[slot].as_deref() == Some(id.as_str()))
                                            >
                                                {asset.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            {empty.then(|| view! {
                                <span class="processing-missing">
                                    "No " {asset_type.label()} " in this project yet"
                                </span>
                            })}
                        </label>
                    }
                })
                .collect_view()}

            <button class="btn btn-primary" disabled=move || !can_start() on:click=on_start>
                {move || if starting.get() { "Starting..." } else { "Start" }}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, asset_type: AssetType, created: &str) -> Asset {
        Asset {
            id: id.into(),
            name: format!("{}.file", id),
            asset_type,
            project_id: "p1".into(),
            creation_time: created.into(),
            description: None,
        }
    }

    #[test]
    fn test_default_selection_picks_latest() {
        let assets = vec![
            asset("old-log", AssetType::EventLog, "2024-01-01T10:00:00"),
            asset("new-log", AssetType::EventLog, "2024-03-01T10:00:00"),
            asset("model", AssetType::ProcessModel, "2024-02-01T10:00:00"),
        ];

        let selection = default_selection(ProcessingType::Discovery.required_assets(), &assets);
        assert_eq!(selection, vec![Some("new-log".to_string())]);

        let selection = default_selection(ProcessingType::Simulation.required_assets(), &assets);
        assert_eq!(selection, vec![Some("model".to_string()), None]);
        assert_eq!(input_assets(&selection), None);
    }

    #[test]
    fn test_input_assets_when_complete() {
        let selection = vec![Some("model".to_string()), Some("params".to_string())];
        assert_eq!(
            input_assets(&selection),
            Some(vec!["model".to_string(), "params".to_string()])
        );
    }
}
