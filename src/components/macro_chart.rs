use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
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
use crate::models::nutrition::{MacroRow, MacronutrientAverages};
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "macro-chart";

#[derive(Properties, PartialEq)]
pub struct MacroChartProps {
    pub averages: Rc<MacronutrientAverages>,
    pub dark_mode: bool,
}

/// Grouped bar chart: one group per diet type, one bar per macronutrient.
#[function_component(MacroChart)]
pub fn macro_chart(props: &MacroChartProps) -> Html {
    let container_ref = use_node_ref();
    let rows = use_memo(props.averages.clone(), |averages| averages.rows());

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (rows, container_ref, dark_mode),
            |(rows, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, rows, *dark_mode);

                    let rows = rows.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(
                        move || render_chart(&container, &rows, dark_mode),
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

fn render_chart(container: &HtmlElement, rows: &[MacroRow], dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || rows.is_empty() {
        return;
    }

    let chart = build_chart(rows, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(rows: &[MacroRow], dark_mode: bool) -> CharmingChart {
    let (title_color, axis_color, grid_color) = text_colors(dark_mode);
    let palette = series_colors(dark_mode);

    let diet_types: Vec<String> = rows.iter().map(|r| r.diet_type.clone()).collect();
    let protein: Vec<f64> = rows.iter().map(|r| r.protein).collect();
    let carbs: Vec<f64> = rows.iter().map(|r| r.carbs).collect();
    let fat: Vec<f64> = rows.iter().map(|r| r.fat).collect();

    CharmingChart::new()
        .color::<Color>(palette.iter().map(|c| (*c).into()).collect())
        .title(
            Title::new()
                .text("Average Macronutrients by Diet Type")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(
            Legend::new()
                .bottom("0")
                .text_style(TextStyle::new().color(axis_color)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("16%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(diet_types)
                .axis_label(AxisLabel::new().rotate(30).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("g")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().name("Protein").data(protein))
        .series(Bar::new().name("Carbs").data(carbs))
        .series(Bar::new().name("Fat").data(fat))
}
