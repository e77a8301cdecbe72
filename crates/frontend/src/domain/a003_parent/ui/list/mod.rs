use contracts::domain::a003_parent::aggregate::Parent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, Button, ButtonAppearance};

use crate::domain::a003_parent::api;
use crate::shared::components::table::{generate_columns, ColumnOptions, DataTable};
use crate::shared::form::{FormModal, ModalSize};
use crate::shared::icons::Icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record::{text_field, to_records, Record};
use crate::system::auth::use_session;

fn column_options(on_view: Callback<String>) -> ColumnOptions {
    ColumnOptions::new()
        .display(["firstName", "lastName", "email", "phone", "relationship"])
        .header("firstName", "First Name")
        .header("lastName", "Last Name")
        .sortable(["firstName", "lastName", "email", "relationship"])
        .with_actions(move |record: &Record| {
            let id = text_field(record, "id");
            view! {
                <button
                    type="button"
                    class="button button--icon"
                    title="View"
                    on:click=move |_| on_view.run(id.clone())
                >
                    {Icon::Eye.view()}
                </button>
            }
            .into_any()
        })
}

#[component]
pub fn ParentsPage() -> impl IntoView {
    let session = use_session();

    let parents: RwSignal<Vec<Parent>> = RwSignal::new(Vec::new());
    let viewing: RwSignal<Option<Parent>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_parents(&client).await {
                Ok(data) => parents.set(data),
                Err(e) => {
                    log::error!("Failed to load parents: {}", e);
                    parents.set(Vec::new());
                    set_error.set(Some(format!("Failed to load parents: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let on_view = Callback::new(move |id: String| {
        viewing.set(parents.with_untracked(|all| all.iter().find(|p| p.id == id).cloned()));
    });

    let options = StoredValue::new(column_options(on_view));
    let records = Signal::derive(move || parents.with(|all| to_records(all)));
    let columns = Signal::derive(move || {
        records.with(|r| options.with_value(|o| generate_columns(r, o)))
    });

    let title = Signal::derive(move || {
        viewing.with(|p| {
            p.as_ref()
                .map(|p| format!("{} {}", p.first_name, p.last_name))
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame
            page_id="a003_parent--list"
            category=PAGE_CAT_LIST
            title="Parents"
            actions=move || view! {
                <Badge>{move || parents.with(Vec::len).to_string()}</Badge>
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
                search_placeholder="Search parents..."
                table_id="parents-table"
            />

            <FormModal
                is_open=Signal::derive(move || viewing.with(Option::is_some))
                title=title
                on_close=Callback::new(move |_| viewing.set(None))
                read_only=true
                size=ModalSize::Small
            >
                {move || viewing.get().map(|p| view! {
                    <div class="details">
                        <div class="details__row">
                            <span class="details__label">"Email"</span>
                            <span class="details__value">{p.email.clone()}</span>
                        </div>
                        <div class="details__row">
                            <span class="details__label">"Phone"</span>
                            <span class="details__value">{p.phone.clone().unwrap_or_else(|| "-".into())}</span>
                        </div>
                        <div class="details__row">
                            <span class="details__label">"Relationship"</span>
                            <span class="details__value">{p.relationship.clone().unwrap_or_else(|| "-".into())}</span>
                        </div>
                    </div>
                })}
            </FormModal>
        </PageFrame>
    }
}
