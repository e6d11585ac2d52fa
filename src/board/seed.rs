//! Initial forum content.

use super::thread::Post;
use super::types::{Section, Topic, TopicFlag};

/// The six sections the forum starts with.
pub fn sections() -> Vec<Section> {
    vec![
        Section::new(
            "support",
            "Поддержка",
            "LifeBuoy",
            "Вопросы и помощь по игре",
            "forum-blue",
        )
        .with_topics(vec![
            Topic::new(
                1,
                "Не могу зайти в аккаунт после обновления",
                "Player_228",
                12,
                345,
                "2 мин",
            )
            .with_flag(TopicFlag::Pinned),
            Topic::new(2, "Баг с текстурами на Android 14", "BugHunter", 5, 120, "15 мин"),
            Topic::new(3, "Как восстановить прогресс?", "NewPlayer", 8, 230, "1 час"),
        ]),
        Section::new("news", "Новости", "Newspaper", "Обновления и анонсы", "primary")
            .with_topics(vec![
                Topic::new(
                    4,
                    "🔥 Обновление 4.2 — новая карта и оружие",
                    "Admin",
                    47,
                    2100,
                    "5 мин",
                )
                .with_flag(TopicFlag::Pinned),
                Topic::new(5, "Технические работы 17 февраля", "Admin", 15, 890, "30 мин")
                    .with_flag(TopicFlag::Locked),
                Topic::new(6, "Итоги зимнего ивента", "Moderator", 23, 560, "3 часа"),
            ]),
        Section::new(
            "discussions",
            "Обсуждения",
            "MessagesSquare",
            "Общение на игровые темы",
            "forum-orange",
        )
        .with_topics(vec![
            Topic::new(7, "Какой класс сильнее в текущей мете?", "MetaGamer", 89, 1500, "1 мин"),
            Topic::new(8, "Ваши любимые моменты в игре", "Nostalgic", 34, 670, "20 мин"),
            Topic::new(9, "Спамер продаёт читы — нужен бан", "FairPlay", 6, 180, "45 мин")
                .with_flag(TopicFlag::Hidden),
        ]),
        Section::new("guides", "Гайды", "BookOpen", "Руководства и советы", "forum-gold")
            .with_topics(vec![
                Topic::new(
                    10,
                    "Полный гайд по прокачке с нуля до 100 уровня",
                    "ProGuide",
                    56,
                    3400,
                    "10 мин",
                )
                .with_flag(TopicFlag::Pinned),
                Topic::new(11, "Фарм денег: топ-5 способов 2026", "MoneyMaker", 28, 1200, "2 часа"),
                Topic::new(12, "Секретные локации на новой карте", "Explorer", 19, 870, "4 часа"),
            ]),
        Section::new(
            "events",
            "События",
            "CalendarDays",
            "Турниры, ивенты и конкурсы",
            "purple",
        )
        .with_topics(vec![
            Topic::new(
                13,
                "🏆 Турнир 2v2 — призовой фонд 50,000",
                "EventManager",
                41,
                1800,
                "3 мин",
            )
            .with_flag(TopicFlag::Pinned),
            Topic::new(14, "Конкурс скриншотов — голосование", "Community", 67, 940, "1 час"),
        ]),
        Section::new(
            "trade",
            "Торговля",
            "ShoppingCart",
            "Обмен и продажа игровых предметов",
            "emerald",
        )
        .with_topics(vec![
            Topic::new(15, "Продам легендарное оружие — дёшево", "Trader_Max", 14, 420, "8 мин"),
            Topic::new(16, "Обмен редких скинов", "SkinCollector", 9, 310, "25 мин"),
            Topic::new(17, "[СКАМ] Осторожно мошенник user_toxic", "WatchDog", 22, 750, "50 мин")
                .with_flag(TopicFlag::AuthorBanned),
        ]),
    ]
}

/// Posts every topic thread starts with.
pub fn welcome_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "GameMaster",
            "Добро пожаловать в обсуждение! Пишите свои мысли и идеи здесь.",
            "15 фев, 14:30",
        ),
        Post::new(
            2,
            "ProPlayer99",
            "Отличная тема, давно ждал обсуждения этого вопроса. Думаю, нужно больше контента для новичков.",
            "15 фев, 15:10",
        ),
        Post::new(
            3,
            "NoviceGamer",
            "Согласен! Было бы здорово иметь больше гайдов по прокачке.",
            "15 фев, 16:45",
        ),
    ]
}
