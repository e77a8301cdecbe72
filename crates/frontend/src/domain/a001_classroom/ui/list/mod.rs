use contracts::domain::a001_classroom::aggregate::Classroom;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, Button, ButtonAppearance};

use crate::domain::a001_classroom::api;
use crate::domain::a001_classroom::ui::details::{
    build_classroom_dto, classroom_fields, classroom_initial_record, validate_classroom,
};
use crate::shared::api_utils::server_detail;
use crate::shared::components::table::{generate_columns, ColumnOptions, DataTable};
use crate::shared::form::{server_field_errors, FieldErrors, FormModal, ModalSize, OpenTracker};
use crate::shared::icons::Icon;
use crate::shared::list_utils::{remove_by, upsert_by};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record::{text_field, to_records, Record};
use crate::system::auth::use_session;

fn column_options(on_edit: Callback<String>, on_delete: Callback<String>) -> ColumnOptions {
    ColumnOptions::new()
        .display(["name", "grade", "capacity", "room"])
        .sortable(["name", "grade", "capacity", "room"])
        .with_actions(move |record: &Record| {
            let id = text_field(record, "id");
            let id_for_delete = id.clone();
            view! {
                <div class="table__actions">
                    <button
                        type="button"
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| on_edit.run(id.clone())
                    >
                        {Icon::Edit.view()}
                    </button>
                    <button
                        type="button"
                        class="button button--icon button--danger"
                        title="Delete"
                        on:click=move |_| on_delete.run(id_for_delete.clone())
                    >
                        {Icon::Delete.view()}
                    </button>
                </div>
            }
            .into_any()
        })
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ClassroomsPage() -> impl IntoView {
    let session = use_session();

    let classrooms: RwSignal<Vec<Classroom>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let form_open = RwSignal::new(false);
    let editing: RwSignal<Option<Classroom>> = RwSignal::new(None);
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(Option::<String>::None);
    let server_errors = RwSignal::new(FieldErrors::new());
    let tracker = StoredValue::new(OpenTracker::default());

    // Each open starts clean; a save still running for an earlier open no
    // longer owns the form.
    Effect::new(move |_| {
        let open = form_open.get();
        let mut opened = None;
        tracker.update_value(|t| opened = t.observe(open));
        if opened.is_some() {
            submitting.set(false);
            submit_error.set(None);
            server_errors.set(FieldErrors::new());
        }
    });

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_classrooms(&client).await {
                Ok(data) => classrooms.set(data),
                Err(e) => {
                    log::error!("Failed to load classrooms: {}", e);
                    classrooms.set(Vec::new());
                    set_error.set(Some(format!("Failed to load classrooms: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let open_add = move || {
        editing.set(None);
        form_open.set(true);
    };

    let on_edit = Callback::new(move |id: String| {
        let found = classrooms.with_untracked(|all| all.iter().find(|c| c.id == id).cloned());
        if let Some(classroom) = found {
            editing.set(Some(classroom));
            form_open.set(true);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let name = classrooms
            .with_untracked(|all| all.iter().find(|c| c.id == id).map(|c| c.name.clone()))
            .unwrap_or_default();
        if !confirm(&format!("Delete classroom \"{}\"?", name)) {
            return;
        }
        let client = session.client();
        spawn_local(async move {
            match api::delete_classroom(&client, &id).await {
                Ok(()) => classrooms.update(|all| remove_by(all, &id, |c| c.id.clone())),
                Err(e) => {
                    log::error!("Failed to delete classroom {}: {}", id, e);
                    set_error.set(Some(format!("Failed to delete classroom: {}", e)));
                }
            }
        });
    });

    let on_close = Callback::new(move |_| {
        form_open.set(false);
        editing.set(None);
    });

    let on_submit = Callback::new(move |draft: Record| {
        if submitting.get_untracked() {
            return;
        }
        let Some(token) = tracker.with_value(OpenTracker::current) else {
            return;
        };
        let dto = build_classroom_dto(&draft);
        let existing_id = editing.with_untracked(|e| e.as_ref().map(|c| c.id.clone()));
        let client = session.client();
        submitting.set(true);
        submit_error.set(None);
        server_errors.set(FieldErrors::new());
        spawn_local(async move {
            let result = match &existing_id {
                Some(id) => api::update_classroom(&client, id, &dto).await,
                None => api::create_classroom(&client, &dto).await,
            };
            let current = tracker
                .try_with_value(|t| t.is_current(token))
                .unwrap_or(false);
            match result {
                Ok(saved) => {
                    classrooms.update(|all| upsert_by(all, saved, |c| c.id.clone()));
                    if current {
                        submitting.set(false);
                        form_open.set(false);
                        editing.set(None);
                    } else {
                        log::debug!("classroom saved after its form was closed");
                    }
                }
                Err(e) => {
                    log::error!("Failed to save classroom: {}", e);
                    if !current {
                        return;
                    }
                    submitting.set(false);
                    let named = server_detail(&e)
                        .map(|detail| server_field_errors(detail, &classroom_fields()))
                        .unwrap_or_default();
                    if named.is_empty() {
                        submit_error.set(Some(e));
                    } else {
                        server_errors.set(named);
                    }
                }
            }
        });
    });

    let options = StoredValue::new(column_options(on_edit, on_delete));
    let records = Signal::derive(move || classrooms.with(|all| to_records(all)));
    let columns = Signal::derive(move || {
        records.with(|r| options.with_value(|o| generate_columns(r, o)))
    });

    let title = Signal::derive(move || {
        if editing.with(Option::is_some) {
            "Edit classroom".to_string()
        } else {
            "Add classroom".to_string()
        }
    });
    let initial_data = Signal::derive(move || editing.with(|e| e.as_ref().map(classroom_initial_record)));

    view! {
        <PageFrame
            page_id="a001_classroom--list"
            category=PAGE_CAT_LIST
            title="Classrooms"
            actions=move || view! {
                <Badge>{move || classrooms.with(Vec::len).to_string()}</Badge>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_add()>
                    {Icon::Plus.view()}
                    " Add classroom"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {Icon::Refresh.view()}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <DataTable
                columns=columns
                records=records
                search_placeholder="Search classrooms..."
                table_id="classrooms-table"
            />

            <FormModal
                is_open=form_open
                title=title
                fields=Signal::derive(classroom_fields)
                initial_data=initial_data
                on_submit=on_submit
                on_close=on_close
                validate=Callback::new(move |draft: Record| validate_classroom(&draft))
                errors=server_errors
                submitting=submitting
                size=ModalSize::Small
            >
                {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            </FormModal>
        </PageFrame>
    }
}
