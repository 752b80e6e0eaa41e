// src/logger.rs
//! `log` クレートのマクロ (info! / warn! など) の出力先をブラウザのコンソールにするロガーだよ。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// `web_sys::console` に書き出すロガー。レベルごとに console.error / warn / info / debug を使い分ける。
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    fn format(record: &Record) -> String {
        match record.module_path() {
            Some(module) => format!("[{}] [{}] {}", record.level(), module, record.args()),
            None => format!("[{}] {}", record.level(), record.args()),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&Self::format(record));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2回目以降は `SetLoggerError` が返るよ。
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// ビルドの種類に合わせたレベル。デバッグビルドなら debug まで出す。
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
