pub mod theme_toggle {
    pub const ARIA_LABEL: &str = "Переключить тему";
    pub const ICON_LIGHT: &str = "🌙";
    pub const ICON_DARK: &str = "☀️";
    pub const SWITCH_TO_DARK: &str = "Темная";
    pub const SWITCH_TO_LIGHT: &str = "Светлая";
}

pub mod toast {
    pub const CLOSE_ARIA: &str = "Закрыть";
    pub const CLOSE_GLYPH: &str = "×";
}

pub mod scroll_to_top {
    pub const TOOLTIP: &str = "Прокрутить наверх";
    pub const GLYPH: &str = "↑";
}

pub mod examples {
    pub const RESULTS_TEMPLATE: &str = "Найдено примеров: {}";
    pub const SHOW_SOLUTION: &str = "<span class=\"icon\">▼</span> Показать решение";
    pub const HIDE_SOLUTION: &str = "<span class=\"icon\">▲</span> Скрыть решение";
}

pub mod shortcuts {
    pub const HELP: &str = "Горячие клавиши: Ctrl+K (поиск), Esc (сброс), Ctrl+/ (справка)";
}

pub mod clipboard {
    pub const BUTTON_GLYPH: &str = "📋";
    pub const BUTTON_TITLE: &str = "Копировать условие";
    pub const COPIED: &str = "Скопировано в буфер обмена!";
    pub const FAILED: &str = "Не удалось скопировать";
}

pub mod print {
    pub const BUTTON: &str = "🖨️ Версия для печати";
}

pub mod exporter {
    pub const DONE: &str = "Данные экспортированы в JSON!";
    pub const FAILED: &str = "Не удалось экспортировать данные";
}

pub mod console {
    pub const BANNER: &str = "ЕГЭ Математика - Параметры. Команды: EGE_APP.exportToJSON(), \
                              EGE_APP.stats(), EGE_APP.events(), EGE_APP.state(), \
                              EGE_APP.toast(сообщение, \"success\"|\"error\"|\"warning\"|\"info\"), \
                              EGE_APP.teardown()";
}
