use contracts::domain::a002_student::aggregate::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, Button, ButtonAppearance, Spinner};

use crate::domain::a002_student::api;
use crate::domain::a002_student::ui::details::{StudentDetailsDialog, StudentFormModal};
use crate::shared::components::table::{generate_columns, ColumnOptions, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::icons::Icon;
use crate::shared::list_utils::{remove_by, upsert_by};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record::{text_field, to_records, Record};
use crate::system::auth::use_session;

#[derive(Clone, Copy)]
struct RowActions {
    on_view: Callback<String>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
}

fn column_options(actions: RowActions) -> ColumnOptions {
    ColumnOptions::new()
        .display(["firstName", "lastName", "email", "dateOfBirth", "classroom"])
        .header("firstName", "First Name")
        .header("lastName", "Last Name")
        .header("dateOfBirth", "Date of Birth")
        .render_text("dateOfBirth", |record: &Record| format_date(&text_field(record, "dateOfBirth")))
        .sortable(["firstName", "lastName", "email", "dateOfBirth"])
        .with_actions(move |record: &Record| {
            let id = text_field(record, "id");
            let (view_id, edit_id, delete_id) = (id.clone(), id.clone(), id);
            view! {
                <div class="table__actions">
                    <button
                        type="button"
                        class="button button--icon"
                        title="View"
                        on:click=move |_| actions.on_view.run(view_id.clone())
                    >
                        {Icon::Eye.view()}
                    </button>
                    <button
                        type="button"
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| actions.on_edit.run(edit_id.clone())
                    >
                        {Icon::Edit.view()}
                    </button>
                    <button
                        type="button"
                        class="button button--icon button--danger"
                        title="Delete"
                        on:click=move |_| actions.on_delete.run(delete_id.clone())
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
pub fn StudentsPage() -> impl IntoView {
    let session = use_session();

    let students: RwSignal<Vec<Student>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let form_open = RwSignal::new(false);
    let editing: RwSignal<Option<Student>> = RwSignal::new(None);
    let viewing: RwSignal<Option<Student>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_students(&client).await {
                Ok(data) => students.set(data),
                Err(e) => {
                    log::error!("Failed to load students: {}", e);
                    students.set(Vec::new());
                    set_error.set(Some(format!("Failed to load students: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let find = move |id: &str| students.with_untracked(|all| all.iter().find(|s| s.id == id).cloned());

    let open_add = move || {
        editing.set(None);
        form_open.set(true);
    };

    let actions = RowActions {
        on_view: Callback::new(move |id: String| viewing.set(find(&id))),
        on_edit: Callback::new(move |id: String| {
            if let Some(student) = find(&id) {
                editing.set(Some(student));
                form_open.set(true);
            }
        }),
        on_delete: Callback::new(move |id: String| {
            let Some(student) = find(&id) else {
                return;
            };
            if !confirm(&format!("Delete student \"{}\"?", student.full_name())) {
                return;
            }
            let client = session.client();
            spawn_local(async move {
                match api::delete_student(&client, &id).await {
                    Ok(()) => students.update(|all| remove_by(all, &id, |s| s.id.clone())),
                    Err(e) => {
                        log::error!("Failed to delete student {}: {}", id, e);
                        set_error.set(Some(format!("Failed to delete student: {}", e)));
                    }
                }
            });
        }),
    };

    let on_close = Callback::new(move |_| {
        form_open.set(false);
        editing.set(None);
    });

    // The form closes itself through `on_close` when the save belongs to it.
    let on_saved = Callback::new(move |saved: Student| {
        students.update(|all| upsert_by(all, saved, |s| s.id.clone()));
    });

    let options = StoredValue::new(column_options(actions));
    let records = Signal::derive(move || students.with(|all| to_records(all)));
    let columns = Signal::derive(move || {
        records.with(|r| options.with_value(|o| generate_columns(r, o)))
    });

    view! {
        <PageFrame
            page_id="a002_student--list"
            category=PAGE_CAT_LIST
            title="Students"
            actions=move || view! {
                <Badge>{move || students.with(Vec::len).to_string()}</Badge>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_add()>
                    {Icon::Plus.view()}
                    " Add student"
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

            <Show
                when=move || !(loading.get() && students.with(Vec::is_empty))
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <DataTable
                    columns=columns
                    records=records
                    search_placeholder="Search students..."
                    table_id="students-table"
                />
            </Show>

            <StudentFormModal
                is_open=form_open
                student=editing
                on_close=on_close
                on_saved=on_saved
            />
            <StudentDetailsDialog
                student=viewing
                on_close=Callback::new(move |_| viewing.set(None))
            />
        </PageFrame>
    }
}
