// State Pattern - behavior that changes with an internal state object
// Two flavors: a traffic light whose states chain to their successor, and a
// player whose state is installed by the client.

use std::fmt;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use crate::config::CatalogConfig;
use crate::error::Result;

// ============================================================================
// Example: Traffic light (states pick their successor)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightColor {
    Red,
    Green,
    Yellow,
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LightColor::Red => "Red",
            LightColor::Green => "Green",
            LightColor::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

pub trait LightState {
    fn color(&self) -> LightColor;

    /// Announces the signal for this state and hands back the next state.
    fn handle_request(self: Box<Self>) -> (&'static str, Box<dyn LightState>);
}

pub struct RedLight;
pub struct GreenLight;
pub struct YellowLight;

impl LightState for RedLight {
    fn color(&self) -> LightColor {
        LightColor::Red
    }

    fn handle_request(self: Box<Self>) -> (&'static str, Box<dyn LightState>) {
        ("Red Light: Stop", Box::new(GreenLight))
    }
}

impl LightState for GreenLight {
    fn color(&self) -> LightColor {
        LightColor::Green
    }

    fn handle_request(self: Box<Self>) -> (&'static str, Box<dyn LightState>) {
        ("Green Light: Go", Box::new(YellowLight))
    }
}

impl LightState for YellowLight {
    fn color(&self) -> LightColor {
        LightColor::Yellow
    }

    fn handle_request(self: Box<Self>) -> (&'static str, Box<dyn LightState>) {
        ("Yellow Light: Caution", Box::new(RedLight))
    }
}

pub struct TrafficLight {
    // Only `None` for the duration of a transition.
    state: Option<Box<dyn LightState>>,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLight {
    pub fn new() -> Self {
        Self {
            state: Some(Box::new(RedLight)),
        }
    }

    pub fn color(&self) -> LightColor {
        self.state
            .as_ref()
            .map_or(LightColor::Red, |state| state.color())
    }

    /// Lets the current state act, then installs whatever state it chose.
    pub fn request(&mut self) -> &'static str {
        let current = self.state.take().unwrap_or_else(|| Box::new(RedLight));
        let from = current.color();
        let (signal, next) = current.handle_request();
        tracing::debug!(%from, to = %next.color(), "traffic light transition");
        self.state = Some(next);
        signal
    }

    /// Drives `ticks` requests, pausing `delay` between consecutive ones.
    pub fn run(&mut self, ticks: u32, delay: Duration, out: &mut dyn Write) -> Result<()> {
        for tick in 0..ticks {
            if tick > 0 && !delay.is_zero() {
                std::thread::sleep(delay);
            }
            writeln!(out, "{}", self.request())?;
        }
        Ok(())
    }
}

// ============================================================================
// Example: Player (client installs the state)
// ============================================================================

pub trait PlayerState: fmt::Display {
    fn do_action(self: Rc<Self>, context: &mut Player) -> &'static str;
}

pub struct StartState;
pub struct StopState;

impl fmt::Display for StartState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Start State")
    }
}

impl fmt::Display for StopState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Stop State")
    }
}

impl PlayerState for StartState {
    fn do_action(self: Rc<Self>, context: &mut Player) -> &'static str {
        context.set_state(self);
        "Player is in start state"
    }
}

impl PlayerState for StopState {
    fn do_action(self: Rc<Self>, context: &mut Player) -> &'static str {
        context.set_state(self);
        "Player is in stop state"
    }
}

#[derive(Default)]
pub struct Player {
    state: Option<Rc<dyn PlayerState>>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: Rc<dyn PlayerState>) {
        tracing::debug!(state = %state, "player state set");
        self.state = Some(state);
    }

    pub fn state(&self) -> Option<&Rc<dyn PlayerState>> {
        self.state.as_ref()
    }

    pub fn describe(&self) -> String {
        match &self.state {
            Some(state) => state.to_string(),
            None => "No State".to_string(),
        }
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_player(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let mut player = Player::new();

    let start = Rc::new(StartState);
    writeln!(out, "{}", start.do_action(&mut player))?;
    writeln!(out, "Current state: {}", player.describe())?;

    let stop = Rc::new(StopState);
    writeln!(out, "{}", stop.do_action(&mut player))?;
    writeln!(out, "Current state: {}", player.describe())?;
    Ok(())
}

pub fn demo_traffic_light(out: &mut dyn Write, config: &CatalogConfig) -> Result<()> {
    let settings = &config.traffic_light;
    TrafficLight::new().run(settings.ticks, settings.tick_delay(), out)
}

// ============================================================================
// Tests
// ============================================================================
