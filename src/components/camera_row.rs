//! Camera Row Component

use camera_list::{CameraRecord, HealthGrade};
use leptos::prelude::*;

use crate::context::use_table;
use crate::store::{use_table_store, TableStateStoreFields};

/// Two-tone ring around a health code
#[component]
fn HealthDot(code: String, grade: HealthGrade) -> impl IntoView {
    view! {
        <span class=format!("health-dot health-{}", grade.as_str()) title=code.clone()>
            {code.clone()}
        </span>
    }
}

#[component]
pub fn CameraRow(record: CameraRecord) -> impl IntoView {
    let ctx = use_table();
    let store = use_table_store();

    let id = record.id.clone();
    let is_selected = move || store.list().read().is_selected(&id);
    let toggle_id = record.id.clone();

    let status_class = if record.is_active() { "status-badge active" } else { "status-badge inactive" };
    let cloud_grade = record.health.cloud_grade();
    let device_grade = record.health.device_grade();

    view! {
        <tr class="camera-row" class:selected=is_selected.clone()>
            <td class="cell-name">
                <input
                    type="checkbox"
                    prop:checked=is_selected.clone()
                    on:change=move |_| {
                        let id = toggle_id.clone();
                        ctx.dispatch(move |controller| controller.toggle_selection(&id));
                    }
                />
                " "
                {record.name.clone()}
            </td>
            <td class="cell-health">
                <span class="health-column">
                    <span class="health-icon" title="Cloud">"☁"</span>
                    <HealthDot code=record.health.cloud.clone() grade=cloud_grade />
                    <span class="health-icon" title="Device">"▤"</span>
                    <HealthDot code=record.health.device.clone() grade=device_grade />
                </span>
            </td>
            <td>{record.location.clone()}</td>
            <td>{record.recorder_label().to_string()}</td>
            <td>{record.tasks.to_string()}</td>
            <td>
                <span class=status_class>{record.status.clone()}</span>
            </td>
            <td class="cell-actions">
                <span class="action-icon">"⊘"</span>
            </td>
        </tr>
    }
}
