//! Built-in catalog contents

use crate::catalog::{AttributeDescriptor as Attr, TagRecord};
use crate::category::Category;
use crate::preview::{FormMethod, HeadingLevel, InputType, LinkTarget, ListMarker, Preview};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn id_and_class(id: &'static str, class: &'static str) -> Vec<Attr> {
    vec![
        Attr::new("id", "Уникальный идентификатор").with_example(id),
        Attr::new("class", "CSS классы").with_example(class),
    ]
}

fn heading(
    name: &'static str,
    level: HeadingLevel,
    description: &'static str,
    text: &str,
    example: &'static str,
    id: &'static str,
    class: &'static str,
) -> TagRecord {
    TagRecord {
        name,
        description,
        category: Category::Structure,
        attributes: id_and_class(id, class),
        example,
        defaults: Some(Preview::Heading {
            level,
            text: text.to_string(),
        }),
    }
}

pub(crate) fn builtin() -> Vec<TagRecord> {
    vec![
        heading(
            "h1",
            HeadingLevel::H1,
            "Главный заголовок страницы (самый высокий уровень)",
            "Главный заголовок",
            "<h1>Главный заголовок</h1>",
            "id=\"main-title\"",
            "class=\"title\"",
        ),
        heading(
            "h2",
            HeadingLevel::H2,
            "Заголовок второго уровня",
            "Заголовок второго уровня",
            "<h2>Заголовок второго уровня</h2>",
            "id=\"section-title\"",
            "class=\"subtitle\"",
        ),
        heading(
            "h3",
            HeadingLevel::H3,
            "Заголовок третьего уровня",
            "Заголовок третьего уровня",
            "<h3>Заголовок третьего уровня</h3>",
            "id=\"subsection-title\"",
            "class=\"heading\"",
        ),
        TagRecord {
            name: "p",
            description: "Тег для создания параграфов текста",
            category: Category::Content,
            attributes: id_and_class("id=\"intro\"", "class=\"text\""),
            example: "<p>Это параграф текста. Он содержит основную информацию страницы.</p>",
            defaults: Some(Preview::Paragraph {
                text: "Это параграф текста. Он содержит основную информацию страницы.".into(),
            }),
        },
        TagRecord {
            name: "table",
            description: "Тег для создания таблиц с данными",
            category: Category::Structure,
            attributes: vec![
                Attr::new("border", "Толщина рамки таблицы").with_example("border=\"1\""),
                Attr::new("cellspacing", "Расстояние между ячейками")
                    .with_example("cellspacing=\"0\""),
                Attr::new("cellpadding", "Отступ внутри ячеек").with_example("cellpadding=\"5\""),
            ],
            example: "<table border=\"1\"><tr><th>Заголовок 1</th><th>Заголовок 2</th></tr><tr><td>Ячейка 1</td><td>Ячейка 2</td></tr></table>",
            defaults: Some(Preview::Table {
                rows: 2,
                cols: 2,
                border: 1,
            }),
        },
        TagRecord {
            name: "img",
            description: "Тег для вставки изображений",
            category: Category::Content,
            attributes: vec![
                Attr::new("src", "Путь к изображению").with_example("src=\"image.jpg\""),
                Attr::new("alt", "Альтернативный текст")
                    .with_example("alt=\"Описание изображения\""),
                Attr::new("width", "Ширина изображения").with_example("width=\"300\""),
                Attr::new("height", "Высота изображения").with_example("height=\"200\""),
            ],
            example: "<img src=\"https://via.placeholder.com/300x200\" alt=\"Пример изображения\" width=\"300\" height=\"200\">",
            defaults: Some(Preview::Image {
                src: "https://via.placeholder.com/300x200".into(),
                alt: "Пример изображения".into(),
                width: 300,
                height: 200,
            }),
        },
        TagRecord {
            name: "a",
            description: "Тег для создания ссылок",
            category: Category::Navigation,
            attributes: vec![
                Attr::new("href", "URL назначения").with_example("href=\"https://example.com\""),
                Attr::new("target", "Где открыть ссылку").with_example("target=\"_blank\""),
                Attr::new("title", "Всплывающая подсказка")
                    .with_example("title=\"Перейти на сайт\""),
            ],
            example: "<a href=\"https://example.com\" target=\"_blank\">Перейти на сайт</a>",
            defaults: Some(Preview::Link {
                href: "https://example.com".into(),
                target: LinkTarget::Blank,
                text: "Перейти на сайт".into(),
            }),
        },
        TagRecord {
            name: "ul",
            description: "Тег для создания неупорядоченного списка",
            category: Category::Structure,
            attributes: vec![Attr::new("type", "Тип маркеров").with_example("type=\"disc\"")],
            example: "<ul><li>Первый пункт</li><li>Второй пункт</li><li>Третий пункт</li></ul>",
            defaults: Some(Preview::List {
                items: strings(&["Первый пункт", "Второй пункт", "Третий пункт"]),
                marker: ListMarker::Disc,
            }),
        },
        TagRecord {
            name: "form",
            description: "Тег для создания форм",
            category: Category::Interactive,
            attributes: vec![
                Attr::new("action", "URL для отправки данных").with_example("action=\"/submit\""),
                Attr::new("method", "Метод отправки").with_example("method=\"post\""),
            ],
            example: "<form action=\"/submit\" method=\"post\"><input type=\"text\" name=\"name\"><button type=\"submit\">Отправить</button></form>",
            defaults: Some(Preview::Form {
                action: "/submit".into(),
                method: FormMethod::Post,
                input_type: InputType::Text,
                input_name: "name".into(),
                button_text: "Отправить".into(),
            }),
        },
        TagRecord {
            name: "header",
            description: "Семантический тег для заголовка страницы или раздела",
            category: Category::Semantic,
            attributes: id_and_class("id=\"page-header\"", "class=\"header\""),
            example: "<header><h1>Название сайта</h1><nav><a href=\"/\">Главная</a></nav></header>",
            defaults: Some(Preview::Header {
                title: "Название сайта".into(),
                nav_items: strings(&["Главная", "О нас", "Контакты"]),
            }),
        },
        TagRecord {
            name: "nav",
            description: "Семантический тег для навигации по сайту",
            category: Category::Semantic,
            attributes: id_and_class("id=\"main-nav\"", "class=\"navigation\""),
            example: "<nav><ul><li><a href=\"/\">Главная</a></li><li><a href=\"/about\">О нас</a></li></ul></nav>",
            defaults: Some(Preview::Nav {
                items: strings(&["Главная", "О нас", "Услуги", "Контакты"]),
            }),
        },
        TagRecord {
            name: "main",
            description: "Основное содержимое страницы",
            category: Category::Semantic,
            attributes: id_and_class("id=\"main-content\"", "class=\"main\""),
            example: "<main><h1>Добро пожаловать</h1><p>Основной контент страницы</p></main>",
            defaults: Some(Preview::Main {
                heading: "Добро пожаловать".into(),
                content: "Основной контент страницы находится здесь.".into(),
            }),
        },
        TagRecord {
            name: "section",
            description: "Семантический тег для раздела страницы",
            category: Category::Semantic,
            attributes: id_and_class("id=\"about-section\"", "class=\"section\""),
            example: "<section><h2>О компании</h2><p>Информация о нашей компании</p></section>",
            defaults: Some(Preview::Section {
                heading: "О компании".into(),
                content: "Информация о нашей компании и наших услугах.".into(),
            }),
        },
        TagRecord {
            name: "article",
            description: "Самостоятельный блок контента (статья, пост, новость)",
            category: Category::Semantic,
            attributes: id_and_class("id=\"article-1\"", "class=\"article\""),
            example: "<article><h2>Заголовок статьи</h2><p>Содержание статьи...</p></article>",
            defaults: Some(Preview::Article {
                title: "Заголовок статьи".into(),
                content: "Это содержимое статьи. Статья может содержать текст, изображения и другие элементы.".into(),
            }),
        },
        TagRecord {
            name: "aside",
            description: "Боковая панель или дополнительная информация",
            category: Category::Semantic,
            attributes: id_and_class("id=\"sidebar\"", "class=\"sidebar\""),
            example: "<aside><h3>Связанные ссылки</h3><ul><li><a href=\"#\">Ссылка 1</a></li></ul></aside>",
            defaults: Some(Preview::Aside {
                title: "Связанные ссылки".into(),
                links: strings(&["Ссылка 1", "Ссылка 2", "Ссылка 3"]),
            }),
        },
        TagRecord {
            name: "footer",
            description: "Нижняя часть страницы с контактной информацией",
            category: Category::Semantic,
            attributes: id_and_class("id=\"page-footer\"", "class=\"footer\""),
            example: "<footer><p>&copy; 2024 Мой сайт</p><p>Контакты: info@example.com</p></footer>",
            defaults: Some(Preview::Footer {
                copyright: "© 2024 Мой сайт".into(),
                contact: "Контакты: info@example.com".into(),
            }),
        },
        TagRecord {
            name: "practice",
            description: "Практика: соберите свою первую веб-страницу из заголовка и параграфа",
            category: Category::Practice,
            attributes: vec![
                Attr::new("lang", "Язык документа (на теге html)").with_example("lang=\"ru\""),
                Attr::new("charset", "Кодировка страницы (на теге meta)")
                    .with_example("charset=\"utf-8\""),
            ],
            example: "<!DOCTYPE html>\n<html>\n<head>\n  <title>Моя первая страница</title>\n</head>\n<body>\n  <h1>Привет, мир!</h1>\n  <p>Это моя первая веб-страница.</p>\n</body>\n</html>",
            defaults: Some(Preview::Practice {
                title: "Моя первая страница".into(),
                heading: "Привет, мир!".into(),
                paragraph: "Это моя первая веб-страница.".into(),
            }),
        },
    ]
}
