use uuid::Uuid;

pub type CharacterId = Uuid;

pub type ItemId = Uuid;
