use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisType, Color, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip,
        Trigger,
    },
    renderer::WasmRenderer,
    series::Scatter,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::chart_style::{series_colors, text_colors};
use crate::config::Config;
use crate::models::nutrition::{DietComparison, Nutrient};
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "comparison-chart";

// The comparison plot relates the two dominant energy macros.
const X_NUTRIENT: Nutrient = Nutrient::Protein;
const Y_NUTRIENT: Nutrient = Nutrient::Carbs;

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub comparison: Rc<DietComparison>,
    pub dark_mode: bool,
}

/// Scatter plot of average protein against average carbs, one point per
/// diet type, plotted exactly as received.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &ComparisonChartProps) -> Html {
    let container_ref = use_node_ref();
    let points = use_memo(props.comparison.clone(), |comparison| {
        comparison.scatter_points(X_NUTRIENT, Y_NUTRIENT)
    });

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (points, container_ref, dark_mode),
            |(points, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, points, *dark_mode);

                    let points = points.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(
                        move || render_chart(&container, &points, dark_mode),
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

fn render_chart(container: &HtmlElement, points: &[(f64, f64)], dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || points.is_empty() {
        return;
    }

    let chart = build_chart(points, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(points: &[(f64, f64)], dark_mode: bool) -> CharmingChart {
    let (title_color, axis_color, grid_color) = text_colors(dark_mode);
    let palette = series_colors(dark_mode);

    let data: Vec<Vec<f64>> = points.iter().map(|(x, y)| vec![*x, *y]).collect();

    CharmingChart::new()
        .color::<Color>(vec![palette[1].into()])
        .title(
            Title::new()
                .text("Protein vs Carbs by Diet Type")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(X_NUTRIENT.label())
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(Y_NUTRIENT.label())
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Scatter::new().symbol_size(14.0).data(data))
}
