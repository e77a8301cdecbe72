use super::schema::{FieldDescriptor, FieldType};
use crate::shared::components::ui::{Input, Select, Textarea};
use leptos::prelude::*;

/// Label text and native `required` flag for a control. Nested controls keep
/// the marker but skip the browser check, which would otherwise block the
/// enclosing form's submit.
fn control_label(field: &FieldDescriptor, nested: bool) -> (String, bool) {
    if field.required {
        (format!("*{}", field.label), !nested)
    } else {
        (field.label.clone(), false)
    }
}

/// Renders the control for one descriptor plus its error line.
///
/// The caller owns the value: `value` reads it, `on_input` receives raw
/// control text. `nested` marks a sub-form living inside another `<form>`.
#[component]
pub fn FormField(
    field: FieldDescriptor,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    nested: bool,
) -> impl IntoView {
    let (label, required) = control_label(&field, nested);
    let id = format!("field-{}", field.name);

    let control = match field.field_type {
        FieldType::Textarea => view! {
            <Textarea
                id=id
                label=label
                value=value
                on_input=on_input
                disabled=disabled
                required=required
            />
        }
        .into_any(),
        FieldType::Select => {
            let placeholder = format!("Select {}", field.label.to_lowercase());
            view! {
                <Select
                    id=id
                    label=label
                    value=value
                    on_change=on_input
                    options=field.options.clone()
                    placeholder=placeholder
                    disabled=disabled
                    required=required
                />
            }
            .into_any()
        }
        other => view! {
            <Input
                id=id
                label=label
                input_type=other.input_type().to_string()
                value=value
                on_input=on_input
                disabled=disabled
                required=required
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__field" class:form__field--invalid=move || error.get().is_some()>
            {control}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_marker_and_native_check() {
        let email = FieldDescriptor::email("email", "Email").required();
        assert_eq!(control_label(&email, false), ("*Email".to_string(), true));
        assert_eq!(control_label(&email, true), ("*Email".to_string(), false));

        let phone = FieldDescriptor::tel("phone", "Phone");
        assert_eq!(control_label(&phone, false), ("Phone".to_string(), false));
        assert_eq!(control_label(&phone, true), ("Phone".to_string(), false));
    }
}
