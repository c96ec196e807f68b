/// Read access to the host's players, worlds and materials.
///
/// Lookups are exact by name except where noted; implementations decide
/// case handling for player names.
pub trait WorldState {
    fn online_player(&self, name: &str) -> Option<OnlinePlayer>;

    /// Players that joined at least once, online or not.
    fn offline_player(&self, name: &str) -> Option<OfflinePlayer>;

    fn world(&self, name: &str) -> Option<World>;

    fn online_players(&self) -> Vec<String>;

    fn offline_players(&self) -> Vec<String>;

    fn worlds(&self) -> Vec<String>;

    /// Material names in upper snake case, e.g. `RED_WOOL`.
    fn materials(&self) -> Vec<String>;

    fn material(&self, name: &str) -> Option<Material> {
        let name = name.to_ascii_uppercase();
        self.materials()
            .into_iter()
            .find(|material| *material == name)
            .map(|name| Material { name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlinePlayer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflinePlayer {
    pub name: String,
    /// Unix millis of the last login, `0` when the player never played.
    pub last_played: i64,
}

impl OfflinePlayer {
    pub fn has_played_before(&self) -> bool {
        self.last_played > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub name: String,
}
