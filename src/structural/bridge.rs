// Bridge Pattern - abstraction and implementation vary independently
// Shapes hold a color; devices hold a remote. Either side can gain variants
// without touching the other.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::Result;

// ============================================================================
// Example: Shapes and colors
// ============================================================================

pub trait Color {
    fn apply_color(&self) -> String;
}

pub struct RedColor;
pub struct BlueColor;

impl Color for RedColor {
    fn apply_color(&self) -> String {
        "Color: Red".to_string()
    }
}

impl Color for BlueColor {
    fn apply_color(&self) -> String {
        "Color: Blue".to_string()
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    color: Box<dyn Color>,
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: impl Color + 'static) -> Self {
        Self {
            color: Box::new(color),
        }
    }
}

impl Square {
    pub fn new(color: impl Color + 'static) -> Self {
        Self {
            color: Box::new(color),
        }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing a circle. {}", self.color.apply_color())
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing a square. {}", self.color.apply_color())
    }
}

// ============================================================================
// Example: Devices and remote controls
// ============================================================================

pub trait RemoteControl {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
}

pub struct RemoteControlA;
pub struct RemoteControlB;

impl RemoteControl for RemoteControlA {
    fn turn_on(&self) -> String {
        "Turning on with RemoteControlA".to_string()
    }

    fn turn_off(&self) -> String {
        "Turning off with RemoteControlA".to_string()
    }
}

impl RemoteControl for RemoteControlB {
    fn turn_on(&self) -> String {
        "Turning on with RemoteControlB".to_string()
    }

    fn turn_off(&self) -> String {
        "Turning off with RemoteControlB".to_string()
    }
}

/// Each call yields the remote's line followed by the device's own line.
pub trait Device {
    fn turn_on(&self) -> [String; 2];
    fn turn_off(&self) -> [String; 2];
}

/// Device refined by a display name; both TV and radio are this type.
pub struct NamedDevice {
    name: &'static str,
    remote: Box<dyn RemoteControl>,
}

impl NamedDevice {
    pub fn tv(remote: impl RemoteControl + 'static) -> Self {
        Self {
            name: "TV",
            remote: Box::new(remote),
        }
    }

    pub fn radio(remote: impl RemoteControl + 'static) -> Self {
        Self {
            name: "Radio",
            remote: Box::new(remote),
        }
    }
}

impl Device for NamedDevice {
    fn turn_on(&self) -> [String; 2] {
        [self.remote.turn_on(), format!("{} is turned on", self.name)]
    }

    fn turn_off(&self) -> [String; 2] {
        [self.remote.turn_off(), format!("{} is turned off", self.name)]
    }
}

// ============================================================================
// Drivers
// ============================================================================

pub fn demo_shape(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(RedColor)),
        Box::new(Square::new(BlueColor)),
    ];
    for shape in &shapes {
        writeln!(out, "{}", shape.draw())?;
    }
    Ok(())
}

pub fn demo_device(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    let devices = [
        NamedDevice::tv(RemoteControlA),
        NamedDevice::radio(RemoteControlB),
    ];
    for device in &devices {
        for line in device.turn_on().iter().chain(device.turn_off().iter()) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(Circle::new(RedColor).draw(), "Drawing a circle. Color: Red");
        assert_eq!(Square::new(BlueColor).draw(), "Drawing a square. Color: Blue");
    }

    #[test]
    fn test_any_shape_any_color() {
        assert_eq!(Circle::new(BlueColor).draw(), "Drawing a circle. Color: Blue");
    }

    #[test]
    fn test_device_delegates_to_remote_first() {
        let tv = NamedDevice::tv(RemoteControlB);
        assert_eq!(
            tv.turn_off(),
            [
                "Turning off with RemoteControlB".to_string(),
                "TV is turned off".to_string()
            ]
        );
    }

    #[test]
    fn test_demo_device_line_count() {
        let mut out = Vec::new();
        demo_device(&mut out, &CatalogConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("Turning on with RemoteControlA\nTV is turned on\n"));
    }
}
