use chrono::Local;
use contracts::dashboards::d400_pl_report::{FilterOptions, Quarter, ReportFilter, MONTH_NAMES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_pl_report::context::{
    export_report, generate_report, generate_snapshot, load_filter_options, reload_data,
    use_report,
};
use crate::dashboards::d400_pl_report::filter_form::FilterForm;
use crate::shared::http::use_api;
use crate::shared::icons::icon;

/// What a panel button asks the service for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelAction {
    Snapshot,
    Summary,
    Export,
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let report = use_report();
    let client = StoredValue::new(use_api());

    let form = RwSignal::new(None::<FilterForm>);
    let year_value = RwSignal::new(String::new());
    let all_groups = RwSignal::new(true);
    let form_error = RwSignal::new(None::<String>);

    let options = Memo::new(move |_| report.with(|s| s.filter_options.clone()));
    let is_loading = Signal::derive(move || report.with(|s| s.is_loading));
    let is_exporting = Signal::derive(move || report.with(|s| s.is_exporting));
    let is_busy = Signal::derive(move || report.with(|s| s.is_busy()));

    // Load filter options on mount
    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            let _ = load_filter_options(&client, report).await;
        });
    });

    // Reset the form whenever a new set of options arrives
    Effect::new(move |_| {
        if let Some(options) = options.get() {
            let defaults = FilterForm::with_defaults(&options, Local::now().date_naive());
            year_value.set(defaults.year.to_string());
            all_groups.set(true);
            form.set(Some(defaults));
        }
    });

    Effect::new(move |_| {
        if let Ok(year) = year_value.get().parse::<i32>() {
            form.update(|f| {
                if let Some(f) = f {
                    f.year = year;
                }
            });
        }
    });

    Effect::new(move |_| {
        let all = all_groups.get();
        form.update(|f| {
            if let Some(f) = f {
                f.set_all_groups(all);
            }
        });
    });

    let edit = move |change: &dyn Fn(&mut FilterForm)| {
        form_error.set(None);
        form.update(|f| {
            if let Some(f) = f {
                change(f);
            }
        });
    };

    let current_filter = move || -> Option<ReportFilter> {
        let result = form.with_untracked(|f| f.as_ref().map(|f| f.to_filter()))?;
        match result {
            Ok(filter) => Some(filter),
            Err(e) => {
                form_error.set(Some(e.to_string()));
                None
            }
        }
    };

    let run = move |action: PanelAction| {
        let Some(filter) = current_filter() else {
            return;
        };
        report.update(|s| s.clear_error());
        let client = client.get_value();
        spawn_local(async move {
            let _ = match action {
                PanelAction::Snapshot => generate_snapshot(&client, report, filter).await,
                PanelAction::Summary => generate_report(&client, report, filter).await,
                PanelAction::Export => export_report(&client, report, filter).await,
            };
        });
    };

    let on_reload = move |_| {
        let client = client.get_value();
        spawn_local(async move {
            let _ = reload_data(&client, report).await;
        });
    };

    let error_view = move || {
        let message = form_error.get().or_else(|| report.with(|s| s.error.clone()));
        message.map(|msg| {
            view! {
                <div class="alert alert--error report-filter__error">
                    <span>{msg}</span>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            form_error.set(None);
                            report.update(|s| s.clear_error());
                        }
                    >
                        "\u{00d7}"
                    </Button>
                </div>
            }
        })
    };

    view! {
        <Card class="report-filter">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {icon("filter")}
                    <span class="report-filter__title">"Report filter"</span>
                </Flex>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        loading=is_loading
                        disabled=Signal::derive(move || form.with(|f| f.is_none()))
                        on_click=move |_| run(PanelAction::Snapshot)
                    >
                        "Generate report"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || is_busy.get() || form.with(|f| f.is_none()))
                        on_click=move |_| run(PanelAction::Summary)
                    >
                        "Summary"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        loading=is_exporting
                        disabled=Signal::derive(move || form.with(|f| f.is_none()))
                        on_click=move |_| run(PanelAction::Export)
                    >
                        {icon("download")}
                        "Export Excel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=is_busy
                        on_click=on_reload
                    >
                        {icon("refresh")}
                        "Reload data"
                    </Button>
                </Flex>
            </Flex>

            {error_view}

            <Show
                when=move || options.with(|o| o.is_some())
                fallback=move || view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Loading filter options..."</span>
                    </Flex>
                }
            >
                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex gap=FlexGap::Large align=FlexAlign::Center>
                        <label class="report-filter__label">"Year"</label>
                        <Select value=year_value size=SelectSize::Small>
                            {move || options.get().map(|o| year_options(&o))}
                        </Select>

                        <Checkbox checked=all_groups label="All business groups" />
                    </Flex>

                    <div class="report-filter__months">
                        {(1..=12u32).map(|month| {
                            let selected = move || form.with(|f| f.as_ref().is_some_and(|f| f.has_month(month)));
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || if selected() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                    on_click=move |_| edit(&|f| f.toggle_month(month))
                                >
                                    {short_month(month)}
                                </Button>
                            }
                        }).collect_view()}
                    </div>

                    <Flex gap=FlexGap::Small>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| edit(&|f| f.select_all_months())
                        >
                            "Full year"
                        </Button>
                        {Quarter::ALL.into_iter().map(|quarter| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| edit(&|f| f.select_quarter(quarter))
                            >
                                {quarter.label()}
                            </Button>
                        }).collect_view()}
                    </Flex>

                    <Show when=move || !all_groups.get()>
                        <div class="report-filter__groups">
                            {move || options.get().map(|o| {
                                o.available_business_groups.into_iter().map(|group| {
                                    let key = group.clone();
                                    let toggle_key = group.clone();
                                    let selected = move || form.with(|f| f.as_ref().is_some_and(|f| f.has_group(&key)));
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=move || if selected() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                            on_click=move |_| {
                                                let group = toggle_key.clone();
                                                edit(&move |f| f.toggle_group(&group))
                                            }
                                        >
                                            {group}
                                        </Button>
                                    }
                                }).collect_view()
                            })}
                        </div>
                    </Show>
                </Flex>
            </Show>
        </Card>
    }
}

fn year_options(options: &FilterOptions) -> impl IntoView {
    options
        .available_years
        .iter()
        .map(|year| {
            let year = year.to_string();
            view! { <option value=year.clone()>{year.clone()}</option> }
        })
        .collect_view()
}

fn short_month(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month as usize - 1)
        .map(|name| &name[..3])
        .unwrap_or("?")
}
