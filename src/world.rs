use eldoutils_core::commands::{OfflinePlayer, OnlinePlayer, World, WorldState};
use rustc_hash::FxHashMap;

/// A fixed world state for the console host.
pub struct MemoryWorld {
    online: Vec<String>,
    /// Player name to last login in unix millis.
    known: FxHashMap<String, i64>,
    worlds: Vec<String>,
    materials: Vec<String>,
}

impl MemoryWorld {
    pub fn sample() -> MemoryWorld {
        let known = [
            ("Steve", 1_700_000_000_000),
            ("Alex", 1_690_000_000_000),
            ("Notch", 1_600_000_000_000),
        ]
        .into_iter()
        .map(|(name, last_played)| (name.to_string(), last_played))
        .collect();
        MemoryWorld {
            online: vec!["Steve".to_string(), "Alex".to_string()],
            known,
            worlds: vec![
                "world".to_string(),
                "world_nether".to_string(),
                "creative plots".to_string(),
            ],
            materials: [
                "STONE",
                "GLASS",
                "GLASS_PANE",
                "RED_WOOL",
                "LIGHT_BLUE_WOOL",
                "RED_STAINED_GLASS_PANE",
                "REDSTONE_TORCH",
                "DIAMOND_SWORD",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl WorldState for MemoryWorld {
    fn online_player(&self, name: &str) -> Option<OnlinePlayer> {
        self.online
            .iter()
            .find(|player| player.eq_ignore_ascii_case(name))
            .map(|name| OnlinePlayer { name: name.clone() })
    }

    fn offline_player(&self, name: &str) -> Option<OfflinePlayer> {
        self.known
            .iter()
            .find(|(player, _)| player.eq_ignore_ascii_case(name))
            .map(|(name, last_played)| OfflinePlayer {
                name: name.clone(),
                last_played: *last_played,
            })
    }

    fn world(&self, name: &str) -> Option<World> {
        self.worlds
            .iter()
            .find(|world| *world == name)
            .map(|name| World { name: name.clone() })
    }

    fn online_players(&self) -> Vec<String> {
        self.online.clone()
    }

    fn offline_players(&self) -> Vec<String> {
        let mut players: Vec<(&String, &i64)> = self.known.iter().collect();
        players.sort_by(|a, b| b.1.cmp(a.1));
        players.into_iter().map(|(name, _)| name.clone()).collect()
    }

    fn worlds(&self) -> Vec<String> {
        self.worlds.clone()
    }

    fn materials(&self) -> Vec<String> {
        self.materials.clone()
    }
}
