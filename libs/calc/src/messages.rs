//! User-facing text
//!
//! All prompts and error lines go through a [`Messages`] catalog so the
//! prompt/response protocol stays identical across locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Error)]
#[error("Unknown locale '{0}' (expected 'en' or 'ru')")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Message catalog for one locale
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub quit_hint: &'static str,
    pub first_number_prompt: &'static str,
    pub second_number_prompt: &'static str,
    pub operator_prompt: &'static str,
    pub invalid_number: &'static str,
    pub invalid_operator: &'static str,
    pub retry_question: &'static str,
    pub retry_reprompt: &'static str,
    pub error_label: &'static str,
    pub result_label: &'static str,
    pub division_by_zero: &'static str,
    pub goodbye: &'static str,
}

impl Messages {
    /// `<Error>: <reason>. <retry question>`
    pub fn retry_line(&self, reason: &str) -> String {
        format!("{}: {}. {}", self.error_label, reason, self.retry_question)
    }

    /// `<Error>: <message>`
    pub fn error_line(&self, message: &str) -> String {
        format!("{}: {}", self.error_label, message)
    }
}

pub static EN: Messages = Messages {
    title: "Calculator",
    quit_hint: "To exit enter 'q'",
    first_number_prompt: "Enter the first number (negative allowed, 'q' to exit):",
    second_number_prompt: "Enter the second number (negative allowed, 'q' to exit):",
    operator_prompt: "Enter an operation (+, -, *, /) or 'q' to exit:",
    invalid_number: "Invalid number",
    invalid_operator: "Invalid operation",
    retry_question: "Do you want to retry? (y/n)",
    retry_reprompt: "Please enter 'y' to retry or 'n' to return to the start:",
    error_label: "Error",
    result_label: "Result",
    division_by_zero: "Division by zero is not possible",
    goodbye: "Goodbye!",
};

pub static RU: Messages = Messages {
    title: "Калькулятор",
    quit_hint: "Для выхода введите 'q'",
    first_number_prompt: "Введите первое число (можно отрицательное, для выхода 'q'):",
    second_number_prompt: "Введите второе число (можно отрицательное, для выхода 'q'):",
    operator_prompt: "Введите операцию (+, -, *, /) или 'q' для выхода:",
    invalid_number: "Введено некорректное число",
    invalid_operator: "Неверная операция",
    retry_question: "Хотите повторить? (y/n)",
    retry_reprompt: "Пожалуйста, введите 'y' для повтора или 'n' для возврата в начало:",
    error_label: "Ошибка",
    result_label: "Результат",
    division_by_zero: "Деление на ноль невозможно",
    goodbye: "До свидания!",
};
