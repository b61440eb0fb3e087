use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        let formatted_status = self.format_status(level);
        println!(
            "📦 {} {} {}",
            self.language_signature(),
            formatted_status,
            message
        );
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        let formatted_status = self.format_status(level);
        println!(
            "📦 {} {} {}",
            self.language_signature(),
            formatted_status,
            message
        );
        for t in trace {
            println!("     ↳ {}", t);
        }
    }

    fn language_signature(&self) -> String {
        let mut s = String::new();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push('[');

        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            })
        )
        .unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str("Packsync");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }

    fn format_status(&self, level: LogLevel) -> String {
        let mut s = String::new();

        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let status = match level {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        };

        s.push('[');
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str(status);
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}
