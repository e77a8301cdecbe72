use contracts::domain::a004_teacher::aggregate::Teacher;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, Button, ButtonAppearance};

use crate::domain::a004_teacher::api;
use crate::shared::components::table::{generate_columns, ColumnOptions, DataTable};
use crate::shared::icons::Icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::record::to_records;
use crate::system::auth::use_session;

fn column_options() -> ColumnOptions {
    ColumnOptions::new()
        .display(["firstName", "lastName", "email", "subject", "phone"])
        .header("firstName", "First Name")
        .header("lastName", "Last Name")
        .sortable(["firstName", "lastName", "email", "subject"])
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    let session = use_session();

    let teachers: RwSignal<Vec<Teacher>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_teachers(&client).await {
                Ok(data) => teachers.set(data),
                Err(e) => {
                    log::error!("Failed to load teachers: {}", e);
                    teachers.set(Vec::new());
                    set_error.set(Some(format!("Failed to load teachers: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let options = StoredValue::new(column_options());
    let records = Signal::derive(move || teachers.with(|all| to_records(all)));
    let columns = Signal::derive(move || {
        records.with(|r| options.with_value(|o| generate_columns(r, o)))
    });

    view! {
        <PageFrame
            page_id="a004_teacher--list"
            category=PAGE_CAT_LIST
            title="Teachers"
            actions=move || view! {
                <Badge>{move || teachers.with(Vec::len).to_string()}</Badge>
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
                search_placeholder="Search teachers..."
                table_id="teachers-table"
            />
        </PageFrame>
    }
}
