//! Interactive example: form controls bound to a [`Preview`] plus its live
//! rendering
//!
//! Both halves are exhaustive matches over `Preview`, so a new variant does
//! not compile until it has controls and a rendering.

use crate::components::form_controls::{
    choice_options, NumberField, SelectField, TextAreaField, TextField,
};
use crate::components::helpers::CodeBlock;
use dioxus::prelude::*;
use tagdoc_common::preview::{numbered_items, table_cells};
use tagdoc_common::text::{join_comma_list, parse_count, split_comma_list};
use tagdoc_common::{
    Choice, FieldValue, FormMethod, HeadingLevel, InputType, LinkTarget, ListMarker, Preview,
};
use tracing::debug;

type FieldChange = EventHandler<(&'static str, FieldValue)>;

/// Form + live preview for one tag, or a placeholder when the tag has none
#[component]
pub fn InteractivePreview(preview: Option<Preview>, on_field_change: FieldChange) -> Element {
    let Some(preview) = preview else {
        return rsx! {
            div { class: "text-gray-600", "Интерактивный пример для этого тега пока не реализован" }
        };
    };

    if let Preview::Practice { .. } = preview {
        return rsx! {
            PracticeWalkthrough { preview, on_field_change }
        };
    }

    let markup = preview.markup();

    rsx! {
        div { class: "space-y-4",
            PreviewControls { preview: preview.clone(), on_field_change }
            div { class: "border rounded p-4 bg-gray-50",
                PreviewFragment { preview }
            }
            CodeBlock { code: markup, caption: "HTML код:".to_string() }
        }
    }
}

/// Guided "first page" exercise: three fields bound to both a rendered page
/// and its full document source
#[component]
fn PracticeWalkthrough(preview: Preview, on_field_change: FieldChange) -> Element {
    let markup = preview.markup();

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-blue-50 p-4 rounded-lg",
                h3 { class: "text-lg font-semibold mb-2", "Создание вашей первой веб-страницы" }
                p { class: "text-gray-700 mb-4",
                    "Попробуйте изменить элементы ниже и посмотрите, как изменится ваша страница!"
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div { class: "space-y-4",
                    PreviewControls { preview: preview.clone(), on_field_change }
                }
                div { class: "border rounded p-4 bg-gray-50",
                    div { class: "text-sm text-gray-600 mb-2", "Предварительный просмотр:" }
                    div { class: "border bg-white p-4 rounded min-h-[200px]",
                        PreviewFragment { preview }
                    }
                }
            }
            CodeBlock { code: markup, caption: "HTML код вашей страницы:".to_string() }
        }
    }
}

fn text_setter(on_change: FieldChange, key: &'static str) -> impl FnMut(String) {
    move |value: String| on_change.call((key, FieldValue::Text(value)))
}

fn number_setter(on_change: FieldChange, key: &'static str) -> impl FnMut(String) {
    move |raw: String| match parse_count(&raw) {
        Ok(n) => on_change.call((key, FieldValue::Number(n))),
        Err(e) => debug!("Ignoring input for {}: {}", key, e),
    }
}

fn comma_list_setter(on_change: FieldChange, key: &'static str) -> impl FnMut(String) {
    move |raw: String| on_change.call((key, FieldValue::List(split_comma_list(&raw))))
}

/// Input controls for the preview's fields
#[component]
fn PreviewControls(preview: Preview, on_field_change: FieldChange) -> Element {
    let on = on_field_change;

    match preview {
        Preview::Heading { text, .. } => rsx! {
            TextField {
                label: "Текст заголовка:",
                value: text,
                placeholder: "Введите текст заголовка",
                on_input: text_setter(on, "text"),
            }
        },
        Preview::Paragraph { text } => rsx! {
            TextAreaField {
                label: "Текст параграфа:",
                value: text,
                placeholder: "Введите текст параграфа",
                on_input: text_setter(on, "text"),
            }
        },
        Preview::Table { rows, cols, border } => rsx! {
            div { class: "flex gap-4 flex-wrap",
                NumberField {
                    label: "Строки:",
                    value: rows,
                    min: 1,
                    max: 5,
                    on_input: number_setter(on, "rows"),
                }
                NumberField {
                    label: "Столбцы:",
                    value: cols,
                    min: 1,
                    max: 5,
                    on_input: number_setter(on, "cols"),
                }
                NumberField {
                    label: "Рамка:",
                    value: border,
                    min: 0,
                    max: 5,
                    on_input: number_setter(on, "border"),
                }
            }
        },
        Preview::Image {
            src,
            alt,
            width,
            height,
        } => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField {
                    label: "URL изображения:",
                    value: src,
                    on_input: text_setter(on, "src"),
                }
                TextField {
                    label: "Alt текст:",
                    value: alt,
                    on_input: text_setter(on, "alt"),
                }
                NumberField {
                    label: "Ширина:",
                    value: width,
                    on_input: number_setter(on, "width"),
                }
                NumberField {
                    label: "Высота:",
                    value: height,
                    on_input: number_setter(on, "height"),
                }
            }
        },
        Preview::Link { href, target, text } => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField { label: "URL:", value: href, on_input: text_setter(on, "href") }
                SelectField {
                    label: "Target:",
                    value: target.as_str(),
                    options: choice_options::<LinkTarget>(),
                    on_change: text_setter(on, "target"),
                }
            }
            TextField {
                label: "Текст ссылки:",
                value: text,
                on_input: text_setter(on, "text"),
            }
        },
        Preview::List { items, marker } => rsx! {
            NumberField {
                label: "Количество пунктов:",
                value: items.len() as u32,
                min: 1,
                max: 10,
                on_input: move |raw: String| match parse_count(&raw) {
                    Ok(n) => on.call(("items", FieldValue::List(numbered_items(n)))),
                    Err(e) => debug!("Ignoring item count: {}", e),
                },
            }
            SelectField {
                label: "Тип маркеров:",
                value: marker.as_str(),
                options: choice_options::<ListMarker>(),
                on_change: text_setter(on, "type"),
            }
        },
        Preview::Form {
            action,
            method,
            input_type,
            button_text,
            ..
        } => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField {
                    label: "Action:",
                    value: action,
                    on_input: text_setter(on, "action"),
                }
                SelectField {
                    label: "Method:",
                    value: method.as_str(),
                    options: choice_options::<FormMethod>(),
                    on_change: text_setter(on, "method"),
                }
                SelectField {
                    label: "Тип input:",
                    value: input_type.as_str(),
                    options: choice_options::<InputType>(),
                    on_change: text_setter(on, "inputType"),
                }
                TextField {
                    label: "Текст кнопки:",
                    value: button_text,
                    on_input: text_setter(on, "buttonText"),
                }
            }
        },
        Preview::Header { title, nav_items } => rsx! {
            TextField {
                label: "Название сайта:",
                value: title,
                placeholder: "Введите название сайта",
                on_input: text_setter(on, "title"),
            }
            TextField {
                label: "Пункты меню (через запятую):",
                value: join_comma_list(&nav_items),
                placeholder: "Главная, О нас, Контакты",
                on_input: comma_list_setter(on, "navItems"),
            }
        },
        Preview::Nav { items } => rsx! {
            TextField {
                label: "Пункты меню (через запятую):",
                value: join_comma_list(&items),
                placeholder: "Главная, О нас, Услуги, Контакты",
                on_input: comma_list_setter(on, "items"),
            }
        },
        Preview::Main { heading, content } => rsx! {
            TextField {
                label: "Заголовок:",
                value: heading,
                placeholder: "Введите заголовок",
                on_input: text_setter(on, "heading"),
            }
            TextAreaField {
                label: "Содержание:",
                value: content,
                placeholder: "Введите содержание",
                on_input: text_setter(on, "content"),
            }
        },
        Preview::Section { heading, content } => rsx! {
            TextField {
                label: "Заголовок раздела:",
                value: heading,
                placeholder: "Введите заголовок раздела",
                on_input: text_setter(on, "heading"),
            }
            TextAreaField {
                label: "Содержание:",
                value: content,
                placeholder: "Введите содержание раздела",
                on_input: text_setter(on, "content"),
            }
        },
        Preview::Article { title, content } => rsx! {
            TextField {
                label: "Заголовок статьи:",
                value: title,
                placeholder: "Введите заголовок статьи",
                on_input: text_setter(on, "title"),
            }
            TextAreaField {
                label: "Содержание статьи:",
                value: content,
                placeholder: "Введите содержание статьи",
                height: "h-32",
                on_input: text_setter(on, "content"),
            }
        },
        Preview::Aside { title, links } => rsx! {
            TextField {
                label: "Заголовок:",
                value: title,
                placeholder: "Введите заголовок боковой панели",
                on_input: text_setter(on, "title"),
            }
            TextField {
                label: "Ссылки (через запятую):",
                value: join_comma_list(&links),
                placeholder: "Ссылка 1, Ссылка 2, Ссылка 3",
                on_input: comma_list_setter(on, "links"),
            }
        },
        Preview::Footer { copyright, contact } => rsx! {
            TextField {
                label: "Copyright:",
                value: copyright,
                placeholder: "© 2024 Мой сайт",
                on_input: text_setter(on, "copyright"),
            }
            TextField {
                label: "Контакты:",
                value: contact,
                placeholder: "info@example.com",
                on_input: text_setter(on, "contact"),
            }
        },
        Preview::Practice {
            title,
            heading,
            paragraph,
        } => rsx! {
            TextField {
                label: "Заголовок страницы:",
                value: title,
                placeholder: "Моя первая страница",
                on_input: text_setter(on, "title"),
            }
            TextField {
                label: "Главный заголовок:",
                value: heading,
                placeholder: "Привет, мир!",
                on_input: text_setter(on, "heading"),
            }
            TextAreaField {
                label: "Текст параграфа:",
                value: paragraph,
                placeholder: "Это моя первая веб-страница.",
                on_input: text_setter(on, "paragraph"),
            }
        },
    }
}

/// Anchor inside a preview; clicking it must not leave the page
#[component]
fn DeadLink(text: String, class: &'static str) -> Element {
    rsx! {
        a {
            href: "#",
            class,
            onclick: move |e| e.prevent_default(),
            "{text}"
        }
    }
}

/// Live rendering of the preview's current values
#[component]
fn PreviewFragment(preview: Preview) -> Element {
    match preview {
        Preview::Heading { level, text } => match level {
            HeadingLevel::H1 => rsx! {
                h1 { class: "text-gray-900 text-3xl font-bold", "{text}" }
            },
            HeadingLevel::H2 => rsx! {
                h2 { class: "text-gray-900 text-2xl font-bold", "{text}" }
            },
            HeadingLevel::H3 => rsx! {
                h3 { class: "text-gray-900 text-xl font-bold", "{text}" }
            },
        },
        Preview::Paragraph { text } => rsx! {
            p { class: "text-gray-700 leading-relaxed", "{text}" }
        },
        Preview::Table { rows, cols, border } => {
            let cells = table_cells(rows, cols);
            rsx! {
                table { class: "w-full", "border": "{border}",
                    tbody {
                        for (r , row) in cells.into_iter().enumerate() {
                            tr { key: "{r}",
                                for (c , cell) in row.into_iter().enumerate() {
                                    td {
                                        key: "{c}",
                                        class: "p-2 border",
                                        style: "border-width: {border}px",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Preview::Image {
            src,
            alt,
            width,
            height,
        } => rsx! {
            div { class: "flex justify-center",
                img {
                    src,
                    alt,
                    width: "{width}",
                    height: "{height}",
                    class: "border",
                }
            }
        },
        Preview::Link { href, target, text } => rsx! {
            a {
                href,
                target: target.as_str(),
                class: "text-blue-600 hover:underline",
                "{text}"
            }
        },
        Preview::List { items, marker } => {
            let marker = marker.as_str();
            rsx! {
                ul { style: "list-style-type: {marker}; padding-left: 1.5rem",
                    for (i , item) in items.into_iter().enumerate() {
                        li { key: "{i}", class: "mb-1", "{item}" }
                    }
                }
            }
        }
        Preview::Form {
            action,
            method,
            input_type,
            input_name,
            button_text,
        } => rsx! {
            form {
                action,
                method: method.as_str(),
                onsubmit: move |e| e.prevent_default(),
                div { class: "mb-3",
                    input {
                        r#type: input_type.as_str(),
                        name: input_name,
                        placeholder: "Введите текст",
                        class: "px-3 py-2 border rounded w-full",
                    }
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700",
                    "{button_text}"
                }
            }
        },
        Preview::Header { title, nav_items } => rsx! {
            header { class: "bg-blue-50 p-4 rounded border",
                h1 { class: "text-xl font-bold text-blue-900 mb-2", "{title}" }
                nav {
                    ul { class: "flex gap-4",
                        for (i , item) in nav_items.into_iter().enumerate() {
                            li { key: "{i}",
                                DeadLink { text: item, class: "text-blue-600 hover:underline" }
                            }
                        }
                    }
                }
            }
        },
        Preview::Nav { items } => rsx! {
            nav { class: "bg-gray-100 p-4 rounded",
                ul { class: "flex gap-6",
                    for (i , item) in items.into_iter().enumerate() {
                        li { key: "{i}",
                            DeadLink {
                                text: item,
                                class: "text-gray-700 hover:text-blue-600 transition-colors",
                            }
                        }
                    }
                }
            }
        },
        Preview::Main { heading, content } => rsx! {
            main { class: "bg-white p-6 rounded border",
                h1 { class: "text-2xl font-bold mb-4", "{heading}" }
                p { class: "text-gray-700", "{content}" }
            }
        },
        Preview::Section { heading, content } => rsx! {
            section { class: "bg-blue-50 p-6 rounded border",
                h2 { class: "text-xl font-bold mb-3 text-blue-900", "{heading}" }
                p { class: "text-gray-700", "{content}" }
            }
        },
        Preview::Article { title, content } => rsx! {
            article { class: "bg-white p-6 rounded border shadow-sm",
                h2 { class: "text-xl font-bold mb-3", "{title}" }
                p { class: "text-gray-700 leading-relaxed", "{content}" }
            }
        },
        Preview::Aside { title, links } => rsx! {
            aside { class: "bg-gray-100 p-4 rounded w-64",
                h3 { class: "font-bold mb-3", "{title}" }
                ul { class: "space-y-2",
                    for (i , link) in links.into_iter().enumerate() {
                        li { key: "{i}",
                            DeadLink { text: link, class: "text-blue-600 hover:underline" }
                        }
                    }
                }
            }
        },
        Preview::Footer { copyright, contact } => rsx! {
            footer { class: "bg-gray-800 text-white p-6 rounded",
                div { class: "flex justify-between items-center",
                    p { "{copyright}" }
                    p { "{contact}" }
                }
            }
        },
        Preview::Practice {
            heading, paragraph, ..
        } => rsx! {
            h1 { class: "text-2xl font-bold mb-4 text-blue-900", "{heading}" }
            p { class: "text-gray-700 leading-relaxed", "{paragraph}" }
        },
    }
}
