use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

const MONTHS_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];
const WEEKDAYS_EN: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// User-facing strings of the booking widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub service: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub not_chosen: &'static str,
    pub available_time: &'static str,
    pub confirm: &'static str,
    pub choose_date_and_time: &'static str,
    pub booking_title: &'static str,
}

const LABELS_RU: Labels = Labels {
    service: "Услуга",
    date: "Дата",
    time: "Время",
    not_chosen: "Не выбрана",
    available_time: "Доступное время",
    confirm: "Подтвердить запись",
    choose_date_and_time: "Пожалуйста, выберите дату и время",
    booking_title: "Запись подтверждена",
};

const LABELS_EN: Labels = Labels {
    service: "Service",
    date: "Date",
    time: "Time",
    not_chosen: "not chosen",
    available_time: "Available time",
    confirm: "Confirm booking",
    choose_date_and_time: "Please choose a date and time",
    booking_title: "Booking confirmed",
};

impl Locale {
    pub fn month_name(self, month0: u32) -> &'static str {
        let idx = (month0 % 12) as usize;
        match self {
            Locale::Ru => MONTHS_RU[idx],
            Locale::En => MONTHS_EN[idx],
        }
    }

    /// Short weekday names, Monday first.
    pub fn weekday_headers(self) -> [&'static str; 7] {
        match self {
            Locale::Ru => WEEKDAYS_RU,
            Locale::En => WEEKDAYS_EN,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ru => &LABELS_RU,
            Locale::En => &LABELS_EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::Ru.month_name(6), "Июль");
        assert_eq!(Locale::En.month_name(0), "January");
        assert_eq!(Locale::En.month_name(11), "December");
    }

    #[test]
    fn test_locale_serde() {
        let l: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Locale::En);
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
    }
}
