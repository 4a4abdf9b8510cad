use druid::widget::{Button, CrossAxisAlignment, Flex, MainAxisAlignment, TextBox};
use druid::{
    theme, AppLauncher, Color, Data, Lens, LocalizedString, TextAlignment, Widget, WidgetExt,
    WidgetId, WindowDesc,
};

use druid_color_thesaurus::*;

use druid_speedometer_widget::{
    commit_input, AngleInputController, Gauge, GaugeConfig, SET_TARGET_ANGLE,
};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const GAUGE_ID: WidgetId = WidgetId::reserved(1);
pub const INPUT_WIDTH: f64 = 100.0;
pub const ROW_SPACING: f64 = 16.0;

//////////////////////////////////////////////////////////////////////////////////////
//
// AppData
//
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Data, Lens, PartialEq)]
pub struct AppData {
    pub angle_input: String,
    pub target_angle: f64,
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((400.0, 360.0))
        .title(LocalizedString::new("speedometer-window-title").with_placeholder("Speedometer"));

    let data = AppData {
        angle_input: String::new(),
        target_angle: 0.0,
    };

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, Color::WHITE);
            env.set(theme::CURSOR_COLOR, blue::ARGENTINIAN_BLUE);
            env.set(theme::BACKGROUND_LIGHT, Color::rgb8(0xF5, 0xF5, 0xF5));
            env.set(theme::TEXT_COLOR, black::ONYX)
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui() -> impl Widget<AppData> {
    let gauge = Gauge::with_config(GaugeConfig::default())
        .with_id(GAUGE_ID)
        .lens(AppData::target_angle);

    Flex::column()
        .with_child(gauge)
        .with_spacer(ROW_SPACING)
        .with_child(make_input_row())
        .main_axis_alignment(MainAxisAlignment::Start)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .padding(10.0)
}

fn make_input_row() -> impl Widget<AppData> {
    let input = TextBox::new()
        .with_placeholder("0-180")
        .with_text_alignment(TextAlignment::Center)
        .controller(AngleInputController::default())
        .fix_width(INPUT_WIDTH)
        .lens(AppData::angle_input);

    let update = Button::new("Update").on_click(|ctx, data: &mut AppData, _env| {
        match commit_input(&data.angle_input) {
            Some(angle) => ctx.submit_command(SET_TARGET_ANGLE.with(angle).to(GAUGE_ID)),
            None => log::debug!("Nothing to commit"),
        }
    });

    Flex::row()
        .with_child(input)
        .with_spacer(ROW_SPACING)
        .with_child(update)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}
