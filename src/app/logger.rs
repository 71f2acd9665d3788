// src/app/logger.rs
//! `log` クレートのマクロ (info! とか) をブラウザのコンソールに流すためのロガーだよ。🖥️

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// ログをブラウザの console.log / warn / error に書き出すロガー。
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            _ => console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2回目以降は何もしない。
pub fn init_console_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
