use super::field::FormField;
use super::schema::{validate_schema, FieldDescriptor, FieldErrors};
use super::session::OpenTracker;
use crate::shared::icons::Icon;
use crate::shared::modal_frame::{ModalFrame, ModalSize};
use crate::shared::record::{text_field, Record};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Generic create/edit form.
///
/// The draft is seeded from `initial_data` each time `is_open` turns true and
/// is discarded on close. The modal never talks to the network: `on_submit`
/// receives the full draft and the caller decides when to close.
///
/// Validation is injected. When `validate` returns a non-empty map the
/// submission is blocked and the messages are shown under their fields.
/// `errors` carries messages computed by the caller (e.g. after a failed
/// request) and is shown the same way.
///
/// In `read_only` mode no controls or submit button are rendered, only the
/// children and a single "Close" action.
#[component]
pub fn FormModal(
    #[prop(into)]
    is_open: Signal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    fields: Signal<Vec<FieldDescriptor>>,
    #[prop(optional, into)]
    initial_data: MaybeProp<Record>,
    #[prop(optional)]
    on_submit: Option<Callback<Record>>,
    on_close: Callback<()>,
    #[prop(optional)]
    validate: Option<Callback<Record, FieldErrors>>,
    #[prop(optional, into)]
    errors: Signal<FieldErrors>,
    /// Disables the form while a submission is in flight
    #[prop(optional, into)]
    submitting: Signal<bool>,
    #[prop(optional)]
    read_only: bool,
    #[prop(optional)]
    size: ModalSize,
    #[prop(optional, into)]
    submit_label: Option<String>,
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let draft = RwSignal::new(Record::new());
    let local_errors = RwSignal::new(FieldErrors::new());
    let tracker = StoredValue::new(OpenTracker::default());

    Effect::new(move |_| {
        let open = is_open.get();
        let mut opened = None;
        tracker.update_value(|t| opened = t.observe(open));
        if opened.is_some() {
            draft.set(initial_data.get_untracked().unwrap_or_default());
            local_errors.set(FieldErrors::new());
        } else if !open {
            draft.set(Record::new());
            local_errors.set(FieldErrors::new());
        }
    });

    // Select options may arrive after opening, so the schema is rechecked as it changes.
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        if let Err(e) = fields.with(|f| validate_schema(f)) {
            log::debug!("form '{}': {}", title.get_untracked(), e);
        }
    });

    let error_for = move |name: &str| {
        local_errors
            .with(|e| e.get(name).cloned())
            .or_else(|| errors.with(|e| e.get(name).cloned()))
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if read_only || submitting.get_untracked() {
            return;
        }
        let data = draft.get_untracked();
        if let Some(validate) = validate {
            let found = validate.run(data.clone());
            if !found.is_empty() {
                log::debug!("form '{}' blocked by {} error(s)", title.get_untracked(), found.len());
                local_errors.set(found);
                return;
            }
        }
        local_errors.set(FieldErrors::new());
        if let Some(on_submit) = on_submit {
            on_submit.run(data);
        }
    };

    let submit_label = StoredValue::new(submit_label.unwrap_or_else(|| "Save".to_string()));
    let children = StoredValue::new(children);

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame on_close=on_close size=size>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        type="button"
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {Icon::X.view()}
                    </button>
                </div>
                {if read_only {
                    view! {
                        <div class="modal-body">
                            {children.with_value(|c| c.as_ref().map(|c| c()))}
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| on_close.run(())
                            >
                                "Close"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    let submit_label = submit_label.get_value();
                    view! {
                        <form class="modal-body form" on:submit=handle_submit>
                            <For
                                each=move || fields.get()
                                key=|f| (f.name.clone(), f.options.len())
                                children=move |field| {
                                    let name = field.name.clone();
                                    let name_for_value = name.clone();
                                    let name_for_error = name.clone();
                                    let coerce_field = field.clone();
                                    view! {
                                        <FormField
                                            field=field
                                            value=Signal::derive(move || {
                                                draft.with(|d| text_field(d, &name_for_value))
                                            })
                                            on_input=Callback::new(move |raw: String| {
                                                let value = coerce_field.coerce(&raw);
                                                draft.update(|d| {
                                                    d.insert(name.clone(), value);
                                                });
                                                local_errors.update(|e| {
                                                    e.remove(&name);
                                                });
                                            })
                                            error=Signal::derive(move || error_for(&name_for_error))
                                            disabled=submitting
                                        />
                                    }
                                }
                            />
                            {children.with_value(|c| c.as_ref().map(|c| c()))}
                            <div class="modal-footer">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| on_close.run(())
                                    disabled=move || submitting.get()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_any()
                }}
            </ModalFrame>
        </Show>
    }
}
