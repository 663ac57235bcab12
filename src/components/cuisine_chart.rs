use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::chart_style::{series_colors, text_colors};
use crate::config::Config;
use crate::models::nutrition::{CuisineCount, CuisineDistribution};
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "cuisine-chart";

#[derive(Properties, PartialEq)]
pub struct CuisineChartProps {
    pub distribution: Rc<CuisineDistribution>,
    pub dark_mode: bool,
}

/// Bar chart of the most common cuisines, counts merged across diet types.
#[function_component(CuisineChart)]
pub fn cuisine_chart(props: &CuisineChartProps) -> Html {
    let container_ref = use_node_ref();
    let totals = use_memo(props.distribution.clone(), |distribution| {
        distribution.top_cuisines(Config::TOP_CUISINES_LIMIT)
    });

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (totals, container_ref, dark_mode),
            |(totals, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, totals, *dark_mode);

                    let totals = totals.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(
                        move || render_chart(&container, &totals, dark_mode),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, totals: &[CuisineCount], dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || totals.is_empty() {
        return;
    }

    let chart = build_chart(totals, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(totals: &[CuisineCount], dark_mode: bool) -> CharmingChart {
    let (title_color, axis_color, grid_color) = text_colors(dark_mode);
    let palette = series_colors(dark_mode);

    let cuisines: Vec<String> = totals.iter().map(|t| t.cuisine.clone()).collect();
    let counts: Vec<f64> = totals.iter().map(|t| f64::from(t.count)).collect();

    CharmingChart::new()
        .color::<Color>(vec![palette[0].into()])
        .title(
            Title::new()
                .text("Most Common Cuisines")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(cuisines)
                .axis_label(AxisLabel::new().rotate(30).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("recipes")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(counts).bar_width("60%"))
}
