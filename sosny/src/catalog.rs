/// A bookable room type. The catalog is fixed and not persisted anywhere;
/// the id and name are denormalized into booking requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Stable identifier, used in booking requests and room filters.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short marketing description.
    pub description: &'static str,
    /// Nightly price in rubles.
    pub price: u32,
    /// Feature tags shown on the room card.
    pub features: &'static [&'static str],
    /// Whether the room can currently be booked.
    pub available: bool,
    /// Image shown on the room card.
    pub image: &'static str,
}

/// The fixed room catalog.
pub const ROOMS: [Room; 3] = [
    Room {
        id: "1",
        name: "Люкс \"Кедр\"",
        description: "Просторный номер с панорамным видом на горы",
        price: 8500,
        features: &["2 комнаты", "Балкон", "Мини-кухня", "Камин"],
        available: true,
        image: "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/2f8413d7-0a6e-4acb-9ea8-bba3726ec9d6.jpg",
    },
    Room {
        id: "2",
        name: "Стандарт \"Сосна\"",
        description: "Уютный номер в окружении соснового леса",
        price: 4500,
        features: &["1 комната", "Вид на лес", "Санузел"],
        available: true,
        image: "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/2f8413d7-0a6e-4acb-9ea8-bba3726ec9d6.jpg",
    },
    Room {
        id: "3",
        name: "Семейный \"Алтай\"",
        description: "Идеальный вариант для семейного отдыха",
        price: 6500,
        features: &["2 спальни", "Гостиная", "Детская зона"],
        available: false,
        image: "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/2f8413d7-0a6e-4acb-9ea8-bba3726ec9d6.jpg",
    },
];

/// Look up a room by its identifier.
pub fn room_by_id(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

/// A service offered by the resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Icon name used by the presentation layer.
    pub icon: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// The services shown on the landing page.
pub const SERVICES: [Service; 6] = [
    Service {
        icon: "Flame",
        title: "Банный комплекс",
        description: "Русская баня, финская сауна с панорамным видом, бассейн с подогревом",
    },
    Service {
        icon: "Waves",
        title: "Бассейн",
        description: "Крытый подогреваемый бассейн с зоной отдыха и видом на горы",
    },
    Service {
        icon: "Sparkles",
        title: "СПА-услуги",
        description: "Классический массаж, антицеллюлитный, лимфодренажный, вакуумный",
    },
    Service {
        icon: "UtensilsCrossed",
        title: "Питание",
        description: "Завтраки и ужины на заказ, мангальные зоны для барбекю",
    },
    Service {
        icon: "Baby",
        title: "Детская площадка",
        description: "Безопасная игровая зона с качелями, горками и песочницей",
    },
    Service {
        icon: "Mountain",
        title: "Экскурсии",
        description: "Организация походов, конных прогулок и экскурсий по Алтаю",
    },
];

/// A guest review shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    /// Name of the reviewer.
    pub name: &'static str,
    /// Star rating, out of five.
    pub rating: u8,
    /// Review text.
    pub text: &'static str,
    /// Month of the stay, as displayed.
    pub date: &'static str,
}

/// The guest reviews shown on the landing page.
pub const REVIEWS: [Review; 3] = [
    Review {
        name: "Елена Смирнова",
        rating: 5,
        text: "Потрясающее место! Чистый воздух, красивейшие виды, отличный сервис. Баня с бассейном - просто сказка!",
        date: "Ноябрь 2024",
    },
    Review {
        name: "Дмитрий Козлов",
        rating: 5,
        text: "Отдыхали семьей неделю. Дети в восторге от площадки, жена от спа-процедур. Обязательно вернемся!",
        date: "Октябрь 2024",
    },
    Review {
        name: "Ирина Петрова",
        rating: 5,
        text: "Уютная атмосфера, вкусная еда, приветливый персонал. Идеальное место для отдыха от городской суеты.",
        date: "Сентябрь 2024",
    },
];

/// The landing page photo gallery.
pub const GALLERY: [&str; 3] = [
    "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/825762e8-db6a-4c41-bb62-2019bce43f95.jpg",
    "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/60d2a964-3069-432a-8d0f-bf520dd79f7a.jpg",
    "https://cdn.poehali.dev/projects/4e115b53-2a8d-4f05-92e4-5196e4e9c0eb/files/2f8413d7-0a6e-4acb-9ea8-bba3726ec9d6.jpg",
];
