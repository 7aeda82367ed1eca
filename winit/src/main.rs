// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use greenhouse_common::{
    local_clock_text, Fill, Greenhouse, GreenhouseConfig, IncrementSource, RandomIncrements, Tag,
};
use slint::{Model, SharedString, VecModel};

/// Our App struct that holds the UI, the greenhouse state and the clock.
///
/// Button callbacks mutate the shared greenhouse and copy the result back into the view model.
/// Everything runs on the UI thread, so the state is shared through an `Rc<RefCell>`.
struct App<S = RandomIncrements> {
    ui: AppWindow,
    greenhouse: Rc<RefCell<Greenhouse<S>>>,
    labels: Rc<VecModel<SharedString>>,
    clock: Clock,
}

impl App {
    /// Create the App with random increments.
    fn new() -> anyhow::Result<Self> {
        Self::with_source(RandomIncrements::new())
    }
}

impl<S: IncrementSource + 'static> App<S> {
    /// Create the window, the greenhouse and wire the buttons.
    fn with_source(source: S) -> anyhow::Result<Self> {
        let ui = AppWindow::new()?;
        let config = GreenhouseConfig::embedded()?;

        let greenhouse = Greenhouse::new(&config, source);

        // The label model is created once and updated row by row afterwards
        let labels: Rc<VecModel<SharedString>> = Rc::new(VecModel::from(
            greenhouse
                .labels()
                .into_iter()
                .map(SharedString::from)
                .collect::<Vec<_>>(),
        ));
        ui.global::<ViewModel>()
            .set_labels(slint::ModelRc::from(labels.clone()));
        render_scene(&ui, &greenhouse);

        let app = Self {
            ui,
            greenhouse: Rc::new(RefCell::new(greenhouse)),
            labels,
            clock: Clock::new(config.clock_interval()),
        };
        app.connect_actions();

        log::info!("Greenhouse view created");
        Ok(app)
    }

    fn connect_actions(&self) {
        let view_model = self.ui.global::<ViewModel>();

        view_model.on_increase_temperature(self.reading_action(Greenhouse::increase_temperature));
        view_model.on_increase_light(self.reading_action(Greenhouse::increase_light));
        view_model.on_increase_moisture(self.reading_action(Greenhouse::increase_moisture));
        view_model.on_toggle_window(self.shape_action(Greenhouse::toggle_window));
        view_model.on_toggle_fan(self.shape_action(Greenhouse::toggle_fan));
    }

    /// Callback for an action that changes a reading: apply it, then refresh the labels.
    fn reading_action(
        &self,
        action: impl Fn(&mut Greenhouse<S>) -> f64 + 'static,
    ) -> impl FnMut() + 'static {
        let greenhouse = self.greenhouse.clone();
        let labels = self.labels.clone();

        move || {
            let mut greenhouse = greenhouse.borrow_mut();
            action(&mut *greenhouse);
            render_labels(&labels, &*greenhouse);
        }
    }

    /// Callback for an action that changes a shape: apply it, then refresh the shape fills.
    fn shape_action<T>(
        &self,
        action: impl Fn(&mut Greenhouse<S>) -> T + 'static,
    ) -> impl FnMut() + 'static {
        let greenhouse = self.greenhouse.clone();
        let ui_handle = self.ui.as_weak();

        move || {
            let mut greenhouse = greenhouse.borrow_mut();
            action(&mut *greenhouse);

            if let Some(ui) = ui_handle.upgrade() {
                render_scene(&ui, &*greenhouse);
            }
        }
    }

    /// Run the App: start the clock and run the event loop until the window is closed.
    fn run(&mut self) -> anyhow::Result<()> {
        self.start_clock();

        // Run the UI (and map an error to an anyhow::Error).
        let result = self.ui.run().map_err(|e| e.into());

        self.stop_clock();
        result
    }

    fn start_clock(&self) {
        self.clock.start(&self.ui);
    }

    /// Stops the clock updates without closing the window.
    fn stop_clock(&self) {
        self.clock.stop();
    }
}

/// Redraws the clock text. Each tick arms the next one, so the interval is measured from the
/// end of the previous tick.
struct Clock {
    interval: Duration,
    // Ticks scheduled under an older generation do nothing.
    generation: Rc<Cell<u64>>,
}

impl Clock {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: Rc::default(),
        }
    }

    /// Show the time right away and keep updating it every interval.
    fn start(&self, ui: &AppWindow) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        update_clock(ui);
        schedule_tick(ui.as_weak(), self.interval, self.generation.clone(), generation);

        log::info!("Clock started, updating every {:?}", self.interval);
    }

    fn stop(&self) {
        self.generation.set(self.generation.get() + 1);
        log::info!("Clock stopped");
    }
}

fn schedule_tick(
    ui_handle: slint::Weak<AppWindow>,
    interval: Duration,
    current: Rc<Cell<u64>>,
    generation: u64,
) {
    slint::Timer::single_shot(interval, move || {
        if current.get() != generation {
            return;
        }

        if let Some(ui) = ui_handle.upgrade() {
            update_clock(&ui);
            schedule_tick(ui_handle, interval, current, generation);
        }
    });
}

/// Replace the label texts in place.
fn render_labels<S: IncrementSource>(labels: &VecModel<SharedString>, greenhouse: &Greenhouse<S>) {
    for (row, text) in greenhouse.labels().into_iter().enumerate() {
        labels.set_row_data(row, text.into());
    }
}

/// Copy the fill of every tagged shape into the view model.
fn render_scene<S: IncrementSource>(ui: &AppWindow, greenhouse: &Greenhouse<S>) {
    let view_model = ui.global::<ViewModel>();

    for tag in Tag::ALL {
        let color = fill_color(greenhouse.fill(tag));

        match tag {
            Tag::Light => view_model.set_light_fill(color),
            Tag::Heater => view_model.set_heater_fill(color),
            Tag::WaterPump => view_model.set_water_pump_fill(color),
            Tag::Window => view_model.set_window_fill(color),
            Tag::Fan => view_model.set_fan_fill(color),
            Tag::TempSensor => view_model.set_temp_sensor_fill(color),
        }
    }
}

fn update_clock(ui: &AppWindow) {
    ui.global::<ViewModel>()
        .set_clock_text(local_clock_text().into());
}

fn fill_color(fill: Fill) -> slint::Color {
    let (red, green, blue) = fill.rgb();
    slint::Color::from_rgb_u8(red, green, blue)
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}

#[cfg(test)]
use greenhouse_common::FixedIncrements;

/// An App on the headless testing platform, with every increment fixed to `increment`.
#[cfg(test)]
fn test_app(increment: f64) -> App<FixedIncrements> {
    i_slint_backend_testing::init_integration_test_with_system_time();

    App::with_source(FixedIncrements(increment)).unwrap()
}

/// Runs the event loop for `duration`.
#[cfg(test)]
fn run_event_loop_for(duration: Duration) {
    slint::Timer::single_shot(duration, || {
        slint::quit_event_loop().unwrap();
    });
    slint::run_event_loop().unwrap();
}

#[test]
fn test_fill_color() {
    assert_eq!(fill_color(Fill::Grey), slint::Color::from_rgb_u8(190, 190, 190));
    assert_eq!(fill_color(Fill::Black), slint::Color::from_rgb_u8(0, 0, 0));
    assert_eq!(fill_color(Fill::White).red(), 255);
}

#[test]
fn test_render_labels_in_place() {
    let config = GreenhouseConfig::embedded().unwrap();
    let mut greenhouse = Greenhouse::new(&config, FixedIncrements(1.0));
    let labels = VecModel::from(vec![SharedString::default(); 5]);

    render_labels(&labels, &greenhouse);
    let first: Vec<_> = labels.iter().collect();
    render_labels(&labels, &greenhouse);
    assert_eq!(labels.iter().collect::<Vec<_>>(), first);
    assert_eq!(first[0], "Temperature: 17.40 °C");

    greenhouse.increase_temperature();
    render_labels(&labels, &greenhouse);

    assert_eq!(labels.row_count(), 5);
    assert_eq!(labels.row_data(0).unwrap(), "Temperature: 18.40 °C");
    assert_eq!(labels.row_data(1).unwrap(), "Humidity: 40.00 %");
}

#[test]
fn test_increase_buttons_update_labels() {
    let app = test_app(1.0);
    let view_model = app.ui.global::<ViewModel>();

    view_model.invoke_increase_temperature();
    view_model.invoke_increase_light();
    view_model.invoke_increase_moisture();

    let labels: Vec<_> = view_model.get_labels().iter().collect();
    assert_eq!(
        labels,
        [
            "Temperature: 18.40 °C",
            "Humidity: 40.00 %",
            "Moisture: 48.40 %",
            "Light Intensity: 46.00 %",
            "Crop Growth: 1.30 %",
        ]
    );
}

#[test]
fn test_toggle_buttons_update_fills() {
    let app = test_app(1.0);
    let view_model = app.ui.global::<ViewModel>();
    let labels: Vec<_> = view_model.get_labels().iter().collect();

    assert_eq!(view_model.get_window_fill(), fill_color(Fill::Grey));
    assert_eq!(view_model.get_fan_fill(), fill_color(Fill::Green));

    view_model.invoke_toggle_window();
    assert_eq!(view_model.get_window_fill(), fill_color(Fill::White));
    assert_eq!(view_model.get_fan_fill(), fill_color(Fill::Green));

    view_model.invoke_toggle_fan();
    assert_eq!(view_model.get_fan_fill(), fill_color(Fill::Black));

    view_model.invoke_toggle_window();
    view_model.invoke_toggle_fan();
    assert_eq!(view_model.get_window_fill(), fill_color(Fill::Grey));
    assert_eq!(view_model.get_fan_fill(), fill_color(Fill::Green));

    assert_eq!(view_model.get_heater_fill(), fill_color(Fill::Red));
    assert_eq!(view_model.get_water_pump_fill(), fill_color(Fill::Blue));
    assert_eq!(view_model.get_light_fill(), fill_color(Fill::Yellow));
    assert_eq!(view_model.get_temp_sensor_fill(), fill_color(Fill::Yellow));
    assert_eq!(view_model.get_labels().iter().collect::<Vec<_>>(), labels);
}

#[test]
fn test_clock_updates_until_stopped() {
    let app = test_app(1.0);
    let seen: Rc<RefCell<Vec<SharedString>>> = Rc::default();

    app.start_clock();

    // Record every distinct clock text while the event loop runs
    let sampler = slint::Timer::default();
    let ui_handle = app.ui.as_weak();
    let samples = seen.clone();
    sampler.start(
        slint::TimerMode::Repeated,
        Duration::from_millis(100),
        move || {
            let text = ui_handle.unwrap().global::<ViewModel>().get_clock_text();
            let mut samples = samples.borrow_mut();
            if samples.last() != Some(&text) {
                samples.push(text);
            }
        },
    );
    run_event_loop_for(Duration::from_millis(3200));
    sampler.stop();

    // The first text plus at least two updates, each close to the current local time
    let seen = seen.borrow();
    assert!(seen.len() >= 3, "clock texts: {seen:?}");

    let now = chrono::Local::now().naive_local();
    for text in seen.iter() {
        let stamp = text.strip_prefix("Time: ").unwrap();
        let when =
            chrono::NaiveDateTime::parse_from_str(stamp, greenhouse_common::CLOCK_FORMAT).unwrap();
        assert!((now - when).num_seconds().abs() <= 5, "{text} vs {now}");
    }

    app.stop_clock();
    let stopped = app.ui.global::<ViewModel>().get_clock_text();

    run_event_loop_for(Duration::from_millis(1500));

    assert_eq!(app.ui.global::<ViewModel>().get_clock_text(), stopped);
}
