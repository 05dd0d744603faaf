use leptos::html::Div;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_pl_report::context::use_report;
use crate::shared::config::AppConfig;
use crate::shared::univer::{UniverWidget, WidgetSlot};

/// Spreadsheet view of the last generated snapshot
///
/// The container div stays in the DOM for the component's lifetime; each new
/// snapshot clears it and mounts a fresh widget on the next animation frame.
#[component]
pub fn SnapshotViewer() -> impl IntoView {
    let report = use_report();
    let locale = use_context::<AppConfig>().unwrap_or_default().widget_locale;

    let container = NodeRef::<Div>::new();
    let slot = StoredValue::new_local(WidgetSlot::<UniverWidget>::new());
    let mount_error = RwSignal::new(None::<String>);

    let snapshot = Memo::new(move |_| report.with(|s| s.snapshot.clone()));
    let title = Memo::new(move |_| report.with(|s| s.title()));
    let is_loading = Signal::derive(move || report.with(|s| s.is_loading));
    let has_snapshot = Signal::derive(move || snapshot.with(|s| s.is_some()));
    let is_blank = Signal::derive(move || snapshot.with(|s| s.as_ref().is_some_and(|wb| wb.is_empty())));
    let sheet_names = Memo::new(move |_| {
        snapshot.with(|s| {
            s.as_ref()
                .map(|wb| {
                    wb.ordered_sheets()
                        .iter()
                        .map(|sheet| sheet.name.as_str())
                        .collect::<Vec<_>>()
                        .join(" · ")
                })
                .unwrap_or_default()
        })
    });

    Effect::new(move |_| {
        let snapshot = snapshot.get();
        let Some(el) = container.get() else {
            return;
        };
        let Some(ticket) = slot.try_update_value(|s| s.invalidate()) else {
            return;
        };
        mount_error.set(None);
        el.set_inner_html("");

        let Some(snapshot) = snapshot else {
            return;
        };
        let locale = locale.clone();
        request_animation_frame(move || {
            if !slot.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping stale univer mount");
                return;
            }
            match UniverWidget::mount(&el, &snapshot, &locale) {
                Ok(widget) => {
                    slot.try_update_value(|s| s.install(ticket, widget));
                }
                Err(err) => {
                    log::error!("univer mount failed: {:?}", err);
                    mount_error.set(Some(format!(
                        "Failed to display the report: {}",
                        err.as_string().unwrap_or_else(|| format!("{:?}", err))
                    )));
                }
            }
        });
    });

    on_cleanup(move || {
        slot.try_update_value(|s| s.dispose());
    });

    view! {
        <Card class="report-viewer">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex vertical=true gap=FlexGap::Small>
                    <span class="report-viewer__title">
                        {move || title.get().unwrap_or_else(|| "P&L report".to_string())}
                    </span>
                    <span class="report-viewer__sheets">{move || sheet_names.get()}</span>
                </Flex>
                <Show when=move || is_loading.get()>
                    <Spinner />
                </Show>
            </Flex>

            {move || mount_error.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            <Show when=move || !has_snapshot.get() && !is_loading.get()>
                <div class="report-viewer__empty">
                    "Choose a year and months, then generate the report."
                </div>
            </Show>

            <Show when=move || is_blank.get()>
                <div class="report-viewer__empty">
                    "No rows match this filter."
                </div>
            </Show>

            <div
                node_ref=container
                class="report-viewer__sheet"
                style:display=move || if has_snapshot.get() { "block" } else { "none" }
            ></div>
        </Card>
    }
}
