//! Name constants understood by the Mineplex stats service.
//!
//! Games, boards and platforms are free-form strings on the wire; these enums
//! are a convenience for callers and the CLI. Every `FromStr` is case, space
//! and underscore insensitive, so `"survival_games"`, `"SurvivalGames"` and
//! `"Survival Games"` all parse to [`Game::SurvivalGames`].

use crate::error::{MineplexError, Result};
use std::fmt;
use std::str::FromStr;

/// Lowercase and drop separators so display names and variant names compare equal.
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! name_table {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every known value, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The name the service expects on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = MineplexError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = normalize_name(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        normalize_name(v.as_str()) == wanted
                            || normalize_name(&format!("{:?}", v)) == wanted
                    })
                    .ok_or_else(|| MineplexError::InvalidName {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

name_table! {
    /// Platforms with their own stats namespace.
    Platform, "platform" {
        Java => "java",
        Bedrock => "bedrock",
    }
}

impl Platform {
    /// Path prefix every platform-scoped endpoint hangs off.
    pub fn base_path(&self) -> &'static str {
        match self {
            Platform::Java => "v1/java",
            Platform::Bedrock => "v1/bedrock",
        }
    }
}

name_table! {
    /// Leaderboard duration types.
    Board, "board" {
        AllTime => "All",
        Yearly => "Yearly",
        Monthly => "Monthly",
        Weekly => "Weekly",
        Daily => "Daily",
    }
}

name_table! {
    /// Games tracked by the stats service, by display name.
    Game, "game" {
        ABarbariansLife => "A Barbarians Life",
        AlienInvasion => "Alien Invasion",
        Area51Raid => "Area 51 Raid",
        BaconBrawl => "Bacon Brawl",
        BattleRoyale => "Battle Royale",
        BawkBawkBattles => "Bawk Bawk Battles",
        BlockHunt => "Block Hunt",
        BombLobbers => "Bomb Lobbers",
        BossBattles => "Boss Battles",
        BouncyBalls => "Bouncy Balls",
        Brawl => "Brawl",
        BuildWars => "Build Wars",
        CakeWarsDuos => "Cake Wars Duos",
        CakeWarsStandard => "Cake Wars Standard",
        CanvasWarfare => "Canvas Warfare",
        CastleAssault => "Castle Assault",
        CastleAssaultTdm => "Castle Assault TDM",
        CastleSiege => "Castle Siege",
        ChampionsCtf => "Champions CTF",
        ChampionsDomination => "Champions Domination",
        ChampionsTdm => "Champions TDM",
        Chest => "Chest",
        ChristmasChaos => "Christmas Chaos",
        ChristmasChaosII => "Christmas Chaos II",
        Clans => "Clans",
        ClimbTime => "Climb Time",
        Competitive1 => "Competitive1",
        CraftAgainstHumanity => "Craft Against Humanity",
        DeathRun => "Death Run",
        DeathTag => "Death Tag",
        DragonEscape => "Dragon Escape",
        DragonEscapeTeams => "Dragon Escape Teams",
        DragonRiders => "Dragon Riders",
        Dragons => "Dragons",
        DragonsTeams => "Dragons Teams",
        DrawMyThing => "Draw My Thing",
        DuckHunt => "Duck Hunt",
        DuckStompers => "Duck Stompers",
        Endurance => "Endurance",
        Evolution => "Evolution",
        GemHunters => "Gem Hunters",
        GemWars => "Gem Wars",
        GladiatorArena => "Gladiator Arena",
        Gladiators => "Gladiators",
        Global => "Global",
        Gravity => "Gravity",
        HalloweenHavoc => "Halloween Havoc",
        HalloweenHavocOld => "Halloween Havoc Old",
        HalloweenHorror => "Halloween Horror",
        HeroesOfGwen => "Heroes of GWEN",
        HeroesOfGwenTraining => "Heroes of GWEN Training",
        HoleInTheWall => "Hole In The Wall",
        Hoops => "Hoops",
        Horseback => "Horseback",
        Juggernaut => "Juggernaut",
        KingOfTheHill => "King Of The Hill",
        LaserTag => "Laser Tag",
        McLeague => "MC League",
        MasterBuilders => "Master Builders",
        MavericksMasterBuilders => "Mavericks Master Builders",
        MicroBattle => "Micro Battle",
        MilkTheCow => "Milk the Cow",
        MineStrike => "Mine Strike",
        MineWare => "Mine Ware",
        MineplexEvent => "Mineplex Event",
        MissileWars => "Missile Wars",
        Missions => "Missions",
        MonsterLeague => "Monster League",
        MonsterMaze => "Monster Maze",
        NanoGames => "Nano Games",
        OneInTheQuiverTeams => "One In The Quiver Teams",
        OneInTheQuiver => "One in the Quiver",
        OneInTheQuiverPayload => "One in the Quiver Payload",
        PlexQuest => "Plex Quest",
        RocketMadness => "Rocket Madness",
        RoseRush => "Rose Rush",
        Runner => "Runner",
        ScaryVillage => "Scary Village",
        SearchAndDestroy => "Search and Destroy",
        SheepQuest => "Sheep Quest",
        Skyfall => "Skyfall",
        SkyfallTeams => "Skyfall Teams",
        Skywars => "Skywars",
        SkywarsTeams => "Skywars Teams",
        SlimeSuckers => "Slime Suckers",
        Snake => "Snake",
        SneakyAssassins => "Sneaky Assassins",
        SnowFight => "Snow Fight",
        SnowSprint => "Snow Sprint",
        SpaceWars => "Space Wars",
        SpeedBuilders => "Speed Builders",
        SquidShooter => "Squid Shooter",
        Starfighters => "Starfighters",
        StompingNaughtyDucks => "Stomping Naughty Ducks",
        StrikeGames => "Strike Games",
        SuperPaintball => "Super Paintball",
        SuperSmashMobs => "Super Smash Mobs",
        SuperSmashMobsDomination => "Super Smash Mobs Domination",
        SuperSmashMobsTeams => "Super Smash Mobs Teams",
        SuperSmashMobsTraining => "Super Smash Mobs Training",
        SuperSpleef => "Super Spleef",
        SuperSpleefTeams => "Super Spleef Teams",
        SuperStacker => "Super Stacker",
        SurvivalGames => "Survival Games",
        SurvivalGamesTeams => "Survival Games Teams",
        TheBridges => "The Bridges",
        Track => "Track",
        TugOfWool => "Tug of Wool",
        TurfWars => "Turf Wars",
        TypeWars => "Type Wars",
        UhcRemastered => "UHC Remastered",
        UltraHardcore => "Ultra Hardcore",
        UltraHardcoreSolo => "Ultra Hardcore Solo",
        UltraHardcoreSoloSpeed => "Ultra Hardcore Solo Speed",
        UltraHardcoreTeamsSpeed => "Ultra Hardcore Teams Speed",
        ValentinesVendetta => "Valentines Vendetta",
        WitherAssault => "Wither Assault",
        WitherBrawl => "Wither Brawl",
        Wizards => "Wizards",
        ZombieSurvival => "Zombie Survival",    }
}
