//! Parent/guardian list edited inside the student form.
//!
//! [`ParentEditor`] owns the list and the nested draft for one form session;
//! nothing is persisted until the outer student form is submitted.

use contracts::domain::a003_parent::aggregate::{Parent, ParentDto};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::form::{FieldDescriptor, FieldErrors, FormField, SelectOption};
use crate::shared::icons::Icon;
use crate::shared::record::{optional_text, text_field, to_record, Record};
use crate::shared::validation::{validate_email_field, validate_names, validate_required};

pub const MAX_PARENTS: usize = 2;
pub const RELATIONSHIPS: [&str; 4] = ["Mother", "Father", "Guardian", "Other"];

pub fn parent_fields() -> Vec<FieldDescriptor> {
    let relationship_options = RELATIONSHIPS
        .iter()
        .map(|r| SelectOption::new(*r, *r))
        .collect();
    vec![
        FieldDescriptor::text("firstName", "First Name").required(),
        FieldDescriptor::text("lastName", "Last Name").required(),
        FieldDescriptor::email("email", "Email").required(),
        FieldDescriptor::tel("phone", "Phone"),
        FieldDescriptor::select("relationship", "Relationship", relationship_options),
    ]
}

pub fn validate_parent(draft: &Record) -> FieldErrors {
    let mut errors = validate_required(draft, &parent_fields());
    validate_names(
        draft,
        &[("firstName", "First Name"), ("lastName", "Last Name")],
        &mut errors,
    );
    validate_email_field(draft, "email", &mut errors);
    errors
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParentEditor {
    parents: Vec<Record>,
    draft: Record,
    editing_index: Option<usize>,
    show_form: bool,
    errors: FieldErrors,
}

impl ParentEditor {
    pub fn from_parents(parents: &[Parent]) -> Self {
        Self {
            parents: parents.iter().take(MAX_PARENTS).map(to_record).collect(),
            ..Self::default()
        }
    }

    pub fn parents(&self) -> &[Record] {
        &self.parents
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    pub fn is_form_open(&self) -> bool {
        self.show_form
    }

    pub fn can_add(&self) -> bool {
        self.parents.len() < MAX_PARENTS
    }

    /// Opens the nested form with an empty draft. No-op at the limit.
    pub fn start_add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.draft = Record::new();
        self.editing_index = None;
        self.errors.clear();
        self.show_form = true;
        true
    }

    pub fn start_edit(&mut self, index: usize) -> bool {
        let Some(parent) = self.parents.get(index) else {
            return false;
        };
        self.draft = parent.clone();
        self.editing_index = Some(index);
        self.errors.clear();
        self.show_form = true;
        true
    }

    pub fn set_draft_field(&mut self, name: &str, value: String) {
        self.draft.insert(name.to_string(), Value::String(value));
        self.errors.remove(name);
    }

    /// Validates the draft and stores it. On failure the draft stays for correction.
    pub fn commit(&mut self) -> Result<(), FieldErrors> {
        let errors = validate_parent(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        let draft = std::mem::take(&mut self.draft);
        match self.editing_index {
            Some(index) if index < self.parents.len() => {
                let merged = &mut self.parents[index];
                for (key, value) in draft {
                    merged.insert(key, value);
                }
            }
            _ => {
                if !self.can_add() {
                    self.draft = draft;
                    let mut errors = FieldErrors::new();
                    errors.insert(
                        "parents".into(),
                        format!("A student can have at most {} parents", MAX_PARENTS),
                    );
                    self.errors = errors.clone();
                    return Err(errors);
                }
                self.parents.push(draft);
            }
        }
        self.close_form();
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.draft.clear();
        self.close_form();
    }

    /// Removes immediately; an edit in progress on that entry is dropped.
    pub fn remove(&mut self, index: usize) {
        if index >= self.parents.len() {
            return;
        }
        self.parents.remove(index);
        match self.editing_index {
            Some(i) if i == index => self.cancel(),
            Some(i) if i > index => self.editing_index = Some(i - 1),
            _ => {}
        }
    }

    fn close_form(&mut self) {
        self.editing_index = None;
        self.errors.clear();
        self.show_form = false;
    }

    /// Payload entries: persisted parents keep their `id`, new ones have none.
    pub fn to_payload(&self) -> Vec<ParentDto> {
        self.parents.iter().map(parent_dto).collect()
    }

    pub fn into_payload(self) -> Vec<ParentDto> {
        self.to_payload()
    }
}

fn parent_dto(record: &Record) -> ParentDto {
    ParentDto {
        id: optional_text(record, "id"),
        first_name: text_field(record, "firstName").trim().to_string(),
        last_name: text_field(record, "lastName").trim().to_string(),
        email: text_field(record, "email").trim().to_string(),
        phone: optional_text(record, "phone"),
        relationship: optional_text(record, "relationship"),
    }
}

fn parent_label(record: &Record) -> String {
    let name = format!(
        "{} {}",
        text_field(record, "firstName"),
        text_field(record, "lastName")
    );
    match optional_text(record, "relationship") {
        Some(rel) => format!("{} ({})", name.trim(), rel),
        None => name.trim().to_string(),
    }
}

/// Parent list with its nested form. Rendered inside the student `<form>`,
/// so every button is `type="button"` and swallows the default action.
#[component]
pub fn ParentListEditor(
    editor: RwSignal<ParentEditor>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let fields = StoredValue::new(parent_fields());

    let on_add = move |ev: MouseEvent| {
        ev.prevent_default();
        editor.update(|e| {
            e.start_add();
        });
    };
    let on_save = move |ev: MouseEvent| {
        ev.prevent_default();
        editor.update(|e| {
            if let Err(errors) = e.commit() {
                log::debug!("parent entry blocked by {} error(s)", errors.len());
            }
        });
    };
    let on_cancel = move |ev: MouseEvent| {
        ev.prevent_default();
        editor.update(ParentEditor::cancel);
    };
    // Enter inside the nested form must not submit the student form.
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            editor.update(|e| {
                if let Err(errors) = e.commit() {
                    log::debug!("parent entry blocked by {} error(s)", errors.len());
                }
            });
        }
    };

    view! {
        <fieldset class="parent-editor" disabled=move || disabled.get()>
            <legend class="parent-editor__title">
                {move || format!("Parents / Guardians ({}/{})", editor.with(|e| e.parents().len()), MAX_PARENTS)}
            </legend>

            <ul class="parent-editor__list">
                {move || {
                    let editing = editor.with(|e| e.editing_index());
                    editor.with(|e| e.parents().to_vec()).into_iter().enumerate().map(|(index, parent)| {
                        let class = if editing == Some(index) {
                            "parent-editor__item parent-editor__item--editing"
                        } else {
                            "parent-editor__item"
                        };
                        view! {
                            <li class=class>
                                <span class="parent-editor__name">{parent_label(&parent)}</span>
                                <span class="parent-editor__email">{text_field(&parent, "email")}</span>
                                <button
                                    type="button"
                                    class="button button--icon"
                                    title="Edit parent"
                                    on:click=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        editor.update(|e| { e.start_edit(index); });
                                    }
                                >
                                    {Icon::Edit.view()}
                                </button>
                                <button
                                    type="button"
                                    class="button button--icon button--danger"
                                    title="Remove parent"
                                    on:click=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        editor.update(|e| e.remove(index));
                                    }
                                >
                                    {Icon::Delete.view()}
                                </button>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>

            <Show when=move || editor.with(|e| e.can_add() && !e.is_form_open())>
                <button type="button" class="button button--secondary" on:click=on_add>
                    {Icon::Plus.view()}
                    " Add parent"
                </button>
            </Show>

            <Show when=move || editor.with(ParentEditor::is_form_open)>
                <div class="parent-editor__form" on:keydown=on_keydown>
                    {fields.get_value().into_iter().map(|field| {
                        let name = field.name.clone();
                        let name_for_value = name.clone();
                        let name_for_error = name.clone();
                        view! {
                            <FormField
                                field=field
                                value=Signal::derive(move || editor.with(|e| text_field(e.draft(), &name_for_value)))
                                on_input=Callback::new(move |raw: String| {
                                    editor.update(|e| e.set_draft_field(&name, raw));
                                })
                                error=Signal::derive(move || editor.with(|e| e.errors().get(&name_for_error).cloned()))
                                disabled=disabled
                                nested=true
                            />
                        }
                    }).collect_view()}
                    {move || editor.with(|e| e.errors().get("parents").cloned()).map(|msg| view! {
                        <div class="form__error">{msg}</div>
                    })}
                    <div class="parent-editor__actions">
                        <button type="button" class="button button--secondary" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button type="button" class="button button--primary" on:click=on_save>
                            {move || if editor.with(|e| e.editing_index().is_some()) { "Update parent" } else { "Save parent" }}
                        </button>
                    </div>
                </div>
            </Show>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(id: &str, first: &str) -> Parent {
        Parent {
            id: id.into(),
            first_name: first.into(),
            last_name: "Williams".into(),
            email: format!("{}@mail.org", first.to_lowercase()),
            phone: None,
            relationship: None,
        }
    }

    fn fill(editor: &mut ParentEditor, first: &str, last: &str, email: &str) {
        editor.set_draft_field("firstName", first.into());
        editor.set_draft_field("lastName", last.into());
        editor.set_draft_field("email", email.into());
    }

    #[test]
    fn test_add_two_then_limit_reached() {
        let mut editor = ParentEditor::default();
        assert!(editor.start_add());
        fill(&mut editor, "Rory", "Williams", "rory@mail.org");
        assert!(editor.commit().is_ok());
        assert!(!editor.is_form_open());

        assert!(editor.start_add());
        fill(&mut editor, "Clara", "Oswald", "clara@mail.org");
        assert!(editor.commit().is_ok());

        assert_eq!(editor.parents().len(), 2);
        assert!(!editor.can_add());
        assert!(!editor.start_add());
        assert!(!editor.is_form_open());
    }

    #[test]
    fn test_edit_with_two_parents_then_remove_reenables_add() {
        let mut editor = ParentEditor::from_parents(&[parent("p1", "Rory"), parent("p2", "Brian")]);
        assert_eq!(editor.parents().len(), 2);
        assert!(!editor.can_add());

        editor.remove(0);
        assert_eq!(editor.parents().len(), 1);
        assert!(editor.can_add());
        assert_eq!(text_field(&editor.parents()[0], "firstName"), "Brian");
    }

    #[test]
    fn test_invalid_draft_is_kept_with_errors() {
        let mut editor = ParentEditor::default();
        editor.start_add();
        fill(&mut editor, "R0ry", "", "rory@mail");

        let errors = editor.commit().unwrap_err();
        assert_eq!(editor.errors(), &errors);
        assert_eq!(errors["lastName"], "Last Name is required");
        assert_eq!(errors["firstName"], "First Name may only contain letters, spaces and hyphens");
        assert_eq!(errors["email"], "Enter a valid email address");
        assert!(editor.is_form_open());
        assert!(editor.parents().is_empty());
        assert_eq!(text_field(editor.draft(), "firstName"), "R0ry");

        editor.set_draft_field("lastName", "Williams".into());
        assert!(!editor.errors().contains_key("lastName"));
    }

    #[test]
    fn test_edit_merges_into_existing_and_keeps_id() {
        let mut editor = ParentEditor::from_parents(&[parent("p1", "Rory")]);
        assert!(editor.start_edit(0));
        editor.set_draft_field("relationship", "Father".into());
        editor.commit().unwrap();

        let payload = editor.to_payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].id.as_deref(), Some("p1"));
        assert_eq!(payload[0].relationship.as_deref(), Some("Father"));
        assert_eq!(editor.editing_index(), None);
    }

    #[test]
    fn test_cancel_discards_draft_without_touching_list() {
        let mut editor = ParentEditor::from_parents(&[parent("p1", "Rory")]);
        editor.start_edit(0);
        editor.set_draft_field("firstName", "Changed".into());
        editor.cancel();

        assert!(!editor.is_form_open());
        assert!(editor.draft().is_empty());
        assert_eq!(text_field(&editor.parents()[0], "firstName"), "Rory");
    }

    #[test]
    fn test_new_parents_have_no_id_in_payload() {
        let mut editor = ParentEditor::from_parents(&[parent("p1", "Rory")]);
        editor.start_add();
        fill(&mut editor, "Amélie", "Pond-Smith", "amelie@mail.org");
        editor.commit().unwrap();

        let payload = editor.into_payload();
        assert_eq!(payload[0].id.as_deref(), Some("p1"));
        assert_eq!(payload[1].id, None);
        assert_eq!(payload[1].first_name, "Amélie");
    }

    #[test]
    fn test_removing_entry_before_edited_one_shifts_index() {
        let mut editor = ParentEditor::from_parents(&[parent("p1", "Rory"), parent("p2", "Brian")]);
        editor.start_edit(1);
        editor.remove(0);
        assert_eq!(editor.editing_index(), Some(0));

        editor.remove(0);
        assert!(!editor.is_form_open());
    }
}
