use contracts::domain::a001_classroom::aggregate::ClassroomOption;
use contracts::domain::a002_student::aggregate::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{build_student_dto, student_fields, student_initial_record};
use super::parents::{ParentEditor, ParentListEditor};
use super::validation::validate_student;
use crate::domain::a001_classroom::api::fetch_classroom_options;
use crate::domain::a002_student::api;
use crate::shared::api_utils::server_detail;
use crate::shared::date_utils::{age_on, format_date, parse_iso_date, today};
use crate::shared::form::{server_field_errors, FieldErrors, FormModal, ModalSize, OpenTracker};
use crate::shared::record::Record;
use crate::system::auth::use_session;

/// Add/edit dialog for a student, including the embedded parent list.
///
/// `student` is `None` for a new record. Classroom options are fetched on
/// every open; results belonging to an earlier open are dropped. A save is
/// always reported through `on_saved`, but only closes the form if it is
/// still the same open instance that submitted.
#[component]
pub fn StudentFormModal(
    #[prop(into)]
    is_open: Signal<bool>,
    #[prop(into)]
    student: Signal<Option<Student>>,
    on_close: Callback<()>,
    on_saved: Callback<Student>,
) -> impl IntoView {
    let session = use_session();

    let tracker = StoredValue::new(OpenTracker::default());
    let classrooms: RwSignal<Vec<ClassroomOption>> = RwSignal::new(Vec::new());
    let classrooms_loading = RwSignal::new(false);
    let classrooms_error = RwSignal::new(Option::<String>::None);
    let editor = RwSignal::new(ParentEditor::default());
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(Option::<String>::None);
    let server_errors = RwSignal::new(FieldErrors::new());

    Effect::new(move |_| {
        let open = is_open.get();
        let mut opened = None;
        tracker.update_value(|t| opened = t.observe(open));
        let Some(token) = opened else {
            return;
        };

        let parents = student.with_untracked(|s| s.as_ref().map(|s| s.parents.clone()).unwrap_or_default());
        editor.set(ParentEditor::from_parents(&parents));
        submit_error.set(None);
        server_errors.set(FieldErrors::new());
        submitting.set(false);
        classrooms.set(Vec::new());
        classrooms_error.set(None);
        classrooms_loading.set(true);

        let client = session.client();
        spawn_local(async move {
            let result = fetch_classroom_options(&client).await;
            let current = tracker
                .try_with_value(|t| t.is_current(token))
                .unwrap_or(false);
            if !current {
                log::debug!("discarding classroom options from a closed student form");
                return;
            }
            classrooms_loading.set(false);
            match result {
                Ok(options) => classrooms.set(options),
                Err(e) => {
                    log::error!("Failed to load classrooms: {}", e);
                    classrooms_error.set(Some(format!("Failed to load classrooms: {}", e)));
                }
            }
        });
    });

    let fields = Signal::derive(move || classrooms.with(|c| student_fields(c)));
    let title = Signal::derive(move || {
        if student.with(Option::is_some) {
            "Edit student".to_string()
        } else {
            "Add student".to_string()
        }
    });
    let initial_data = Signal::derive(move || student.with(|s| s.as_ref().map(student_initial_record)));

    let validate = Callback::new(move |draft: Record| {
        validate_student(&draft, &fields.get_untracked(), today())
    });

    let on_submit = Callback::new(move |draft: Record| {
        if submitting.get_untracked() {
            return;
        }
        let Some(token) = tracker.with_value(OpenTracker::current) else {
            return;
        };
        let dto = build_student_dto(&draft, editor.with_untracked(ParentEditor::to_payload));
        let existing_id = student.with_untracked(|s| s.as_ref().map(|s| s.id.clone()));
        let client = session.client();

        submitting.set(true);
        submit_error.set(None);
        server_errors.set(FieldErrors::new());
        spawn_local(async move {
            let result = match &existing_id {
                Some(id) => api::update_student(&client, id, &dto).await,
                None => api::create_student(&client, &dto).await,
            };
            let current = tracker
                .try_with_value(|t| t.is_current(token))
                .unwrap_or(false);
            match result {
                Ok(saved) => {
                    on_saved.run(saved);
                    if current {
                        submitting.set(false);
                        on_close.run(());
                    } else {
                        log::debug!("student saved after its form was closed");
                    }
                }
                Err(e) => {
                    log::error!("Failed to save student: {}", e);
                    if !current {
                        return;
                    }
                    submitting.set(false);
                    let named = server_detail(&e)
                        .map(|detail| fields.with_untracked(|f| server_field_errors(detail, f)))
                        .unwrap_or_default();
                    if named.is_empty() {
                        submit_error.set(Some(format!("Failed to save student: {}", e)));
                    } else {
                        server_errors.set(named);
                    }
                }
            }
        });
    });

    view! {
        <FormModal
            is_open=is_open
            title=title
            fields=fields
            initial_data=initial_data
            on_submit=on_submit
            on_close=on_close
            validate=validate
            errors=server_errors
            submitting=submitting
            size=ModalSize::Large
        >
            <Show when=move || classrooms_loading.get()>
                <div class="form__hint">"Loading classrooms..."</div>
            </Show>
            {move || classrooms_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <ParentListEditor editor=editor disabled=submitting />
            {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        </FormModal>
    }
}

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details__row">
            <span class="details__label">{label}</span>
            <span class="details__value">{value}</span>
        </div>
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

/// Read-only dialog with everything known about one student.
#[component]
pub fn StudentDetailsDialog(
    #[prop(into)]
    student: Signal<Option<Student>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || student.with(Option::is_some));
    let title = Signal::derive(move || {
        student.with(|s| s.as_ref().map(Student::full_name).unwrap_or_default())
    });

    view! {
        <FormModal is_open=is_open title=title on_close=on_close read_only=true size=ModalSize::Small>
            {move || student.get().map(|s| {
                let age = parse_iso_date(&s.date_of_birth)
                    .map(|birth| age_on(birth, today()).to_string())
                    .unwrap_or_else(|| "-".to_string());
                let classroom = s.classroom.as_ref().map(|c| c.name.clone());
                view! {
                    <div class="details">
                        {detail_row("Email", s.email.clone())}
                        {detail_row("Date of Birth", format_date(&s.date_of_birth))}
                        {detail_row("Age", age)}
                        {detail_row("Gender", or_dash(&s.gender))}
                        {detail_row("Phone", or_dash(&s.phone))}
                        {detail_row("Address", or_dash(&s.address))}
                        {detail_row("Classroom", or_dash(&classroom))}
                        <h3 class="details__section">"Parents / Guardians"</h3>
                        {if s.parents.is_empty() {
                            view! { <p class="details__empty">"No parents recorded"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="details__list">
                                    {s.parents.iter().map(|p| {
                                        let relationship = p.relationship.clone().map(|r| format!(" ({})", r)).unwrap_or_default();
                                        view! {
                                            <li>
                                                {format!("{} {}{}", p.first_name, p.last_name, relationship)}
                                                " · "{p.email.clone()}
                                                {p.phone.clone().map(|ph| format!(" · {}", ph))}
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    </div>
                }
            })}
        </FormModal>
    }
}
