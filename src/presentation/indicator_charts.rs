use leptos::html::Canvas;
use leptos::*;

use crate::domain::{
    chart::{ChartDataset, ChartLayout},
    logging::{LogComponent, get_logger},
};
use crate::event_utils::{on_window_resize, window_inner_size};
use crate::infrastructure::rendering::CanvasRenderer;

fn current_layout() -> ChartLayout {
    let (width, height) = window_inner_size();
    ChartLayout::from_window(width, height)
}

/// One line chart per dataset, sized from the window; a placeholder when there is nothing to draw
#[component]
pub fn IndicatorCharts(#[prop(into)] datasets: Signal<Vec<ChartDataset>>) -> impl IntoView {
    let layout = create_rw_signal(current_layout());
    let resize_listener = on_window_resize(move |_| layout.set(current_layout()));
    on_cleanup(move || resize_listener.remove());

    view! {
        <Show
            when=move || datasets.with(|sets| !sets.is_empty())
            fallback=|| view! { <p class="indicator-placeholder">"No indicator data"</p> }
        >
            <div class="indicator-charts">
                {move || {
                    datasets
                        .get()
                        .into_iter()
                        .map(|dataset| view! { <ChartCanvas dataset=dataset layout=layout /> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn ChartCanvas(dataset: ChartDataset, layout: RwSignal<ChartLayout>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let layout = layout.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(error) = CanvasRenderer::new(layout).render(&canvas, &dataset) {
            get_logger().error(
                LogComponent::Presentation("IndicatorCharts"),
                &format!("Failed to draw indicator: {:?}", error),
            );
        }
    });

    view! { <canvas class="indicator-chart" node_ref=canvas_ref></canvas> }
}
