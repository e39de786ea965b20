//! Catalogue data: numeric enumerations and name tables.
//!
//! Nothing in here has behaviour beyond lookup. The small closed sets
//! (walk modes, orb colours, pings, card-play failures) are Rust enums
//! that travel as their numeric value. The large open ones (ability
//! lines, card templates) are plain `(name, id)` tables.

use serde::{Deserialize, Serialize};

/// A numeric value with no entry in a catalogue enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} has no entry for value {value}")]
pub struct UnknownCatalogValue {
    pub kind: &'static str,
    pub value: u32,
}

// ---------------------------------------------------------------------------
// Numeric enums
// ---------------------------------------------------------------------------

/// Declares a fieldless enum that serializes as its discriminant.
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )*
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = UnknownCatalogValue;

            fn try_from(raw: u32) -> Result<Self, Self::Error> {
                match raw {
                    $( $value => Ok($name::$variant), )*
                    _ => Err(UnknownCatalogValue { kind: stringify!($name), value: raw }),
                }
            }
        }
    };
}

numeric_enum! {
    /// How a squad moves along a goto path.
    WalkMode {
        PartialForce = 1,
        Force = 2,
        Normal = 4,
        Crusade = 5,
        Scout = 6,
        Patrol = 7,
    }
}

numeric_enum! {
    /// Map ping kinds.
    Ping {
        Attention = 0,
        Attack = 1,
        Defend = 2,
        NeedHelp = 4,
        Meet = 5,
    }
}

numeric_enum! {
    /// Orb colours as reported on token slots.
    OrbColor {
        White = 0,
        Shadow = 1,
        Nature = 2,
        Frost = 3,
        Fire = 4,
        Starting = 5,
        All = 7,
    }
}

numeric_enum! {
    /// Colours a token slot can be built as.
    CreateOrbColor {
        Shadow = 1,
        Nature = 2,
        Frost = 3,
        Fire = 4,
    }
}

numeric_enum! {
    /// Why the host refused to play a card at the requested place.
    WhyCanNotPlayCardThere {
        DoesNotHaveEnoughPower = 0x10,
        InvalidPosition = 0x20,
        CardCondition = 0x80,
        ConditionPreventCardPlay = 0x100,
        DoesNotHaveThatCard = 0x200,
        DoesNotHaveEnoughOrbs = 0x400,
        CastingTooOften = 0x10000,
    }
}

// ---------------------------------------------------------------------------
// Ability lines
// ---------------------------------------------------------------------------

/// An ability line, carried on the wire by name.
///
/// The host may add lines at any time, so any name is accepted; use
/// [`AbilityLine::id`] to look it up in the known table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityLine(pub String);

impl AbilityLine {
    pub fn new(name: impl Into<String>) -> AbilityLine {
        AbilityLine(name.into())
    }

    /// The line with the given numeric id, if the table knows it.
    pub fn from_id(id: u32) -> Option<AbilityLine> {
        ABILITY_LINES
            .iter()
            .find(|&&(_, line_id)| line_id == id)
            .map(|&(name, _)| AbilityLine::new(name))
    }

    /// Numeric id of this line, if the table knows it.
    pub fn id(&self) -> Option<u32> {
        ABILITY_LINES
            .iter()
            .find(|&&(name, _)| name == self.0)
            .map(|&(_, id)| id)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Known ability lines, `(name, id)`.
pub const ABILITY_LINES: &[(&str, u32)] = &[
    ("_EAsBug_betterSafeThanSorry", 0),
    ("ModifyWalkSpeed", 1),
    ("UnControllable", 4),
    ("UnKillable", 5),
    ("UnAttackable", 9),
    ("HitMultiple", 10),
    ("_ACModifier", 14),
    ("DamageOverTime", 15),
    ("DamageBuff", 21),
    ("PowerOutputModifier", 23),
    ("MoveSpeedOverwrite", 24),
    ("HitMultipleRanged", 25),
    ("HPModifier", 26),
    ("Aura", 27),
    ("PreventCardPlay", 29),
    ("_SpreadFire", 31),
    ("_SquadSpawnZone", 32),
    ("HitMultipleProjectile", 33),
    ("_MarkedTargetDamageMultiplier", 36),
    ("_MarkedTargetDamage", 37),
    ("_AttackPauseDelay", 39),
    ("_MarkedForTeleport", 40),
    ("_RangeModifier", 41),
    ("ForceAttack", 42),
    ("OnEntityDie", 44),
    ("_FireLanceAbility", 47),
    ("Collector", 50),
    ("_ChangeTargetAggro", 51),
    ("_FireLanceBurstCollector", 53),
    ("RegenerationOld", 54),
    ("_TimedSpell", 57),
    ("Scatter", 58),
    ("_DamageOverTimeNoCombat", 59),
    ("LifeStealer", 60),
    ("BarrierGate", 61),
    ("GlobalRevive", 62),
    ("TrampleResistance", 64),
    ("TrampleOverwrite", 65),
    ("PushbackResistance", 66),
    ("MeleePushbackOverride", 67),
    ("_FanCollector", 69),
    ("MeleeFightSpeedModifier", 71),
    ("_SpellRangeModifierIncoming", 72),
    ("SpellRangeModifierOutgoing", 73),
    ("_FanCollectorBurst", 74),
    ("RangedFightSpeedModifier", 75),
    ("_SquadRestore", 76),
    ("DamagePowerTransfer", 79),
    ("TimedSpell", 80),
    ("TrampleRevengeDamage", 81),
    ("LinkedFire", 83),
    ("DamageBuffAgainst", 84),
    ("IncomingDamageModifier", 85),
    ("GeneratorPower", 86),
    ("IceShield", 87),
    ("DoTRefresh", 88),
    ("EnrageThreshold", 89),
    ("Immunity", 90),
    ("_UnitSpawnZone", 91),
    ("Rage", 92),
    ("_PassiveCharge", 93),
    ("MeleeHitSpell", 95),
    ("_FireDebuff", 97),
    ("FrostDebuff", 98),
    ("SpellBlocker", 100),
    ("ShadowDebuff", 102),
    ("SuicidalBomb", 103),
    ("GrantToken", 110),
    ("TurretCannon", 112),
    ("SpellOnSelfCast", 113),
    ("AbilityOnSelfResolve", 114),
    ("SuppressUserCommand", 118),
    ("LineCast", 120),
    ("NoCheer", 132),
    ("UnitShredderJobCondition", 133),
    ("DamageRadialArea", 134),
    ("_DamageConeArea", 137),
    ("DamageConeCutArea", 138),
    ("ConstructionRepairModifier", 139),
    ("Portal", 140),
    ("Tunnel", 141),
    ("ModeConditionDelay", 142),
    ("HealAreaRadial", 144),
    ("_145LeftoverDoesNotReallyExistButIsUsed", 145),
    ("_146LeftoverDoesNotReallyExistButIsUsed", 146),
    ("OverrideWeaponType", 151),
    ("DamageRadialAreaUsingCorpse", 153),
    ("HealAreaRadialInstantContinues", 154),
    ("ChargeableBombController", 155),
    ("ChargeAttack", 156),
    ("ChargeableBomb", 157),
    ("ModifyRotationSpeed", 159),
    ("ModifyAcceleration", 160),
    ("FormationOverwrite", 161),
    ("EffectHolder", 162),
    ("WhiteRangersHomeDefenseTrigger", 163),
    ("_167LeftoverDoesNotReallyExistButIsUsed", 167),
    ("_168LeftoverDoesNotReallyExistButIsUsed", 168),
    ("HealReservoirUsingCorpse", 170),
    ("ModeChangeBlocker", 171),
    ("BarrierModuleEnterBlock", 172),
    ("ProduceAmmoUsingCorpseInjurity", 173),
    ("IncomingDamageSpreadOnTargetAlignmentArea1", 174),
    ("DamageSelfOnMeleeHit", 175),
    ("HealthCapCurrent", 176),
    ("ConstructionUnCrushable", 179),
    ("ProduceAmmoOverTime", 180),
    ("BarrierSetBuildDelay", 181),
    ("ChannelTimedSpell", 183),
    ("AuraOnEnter", 184),
    ("ParalyzeAbility", 185),
    ("IgnoreSummoningSickness", 186),
    ("BlockRepair", 187),
    ("Corruption", 188),
    ("UnHealable", 189),
    ("Immobile", 190),
    ("ModifyHealing", 191),
    ("IgnoreInCardCondition", 192),
    ("MovementMode", 193),
    ("ConsumeAmmoHealSelf", 195),
    ("ConsumeAmmoHealAreaRadial", 196),
    ("CorpseGather", 197),
    ("AbilityNearEntity", 198),
    ("ModifyIceShieldDecayRate", 200),
    ("ModifyDamageIncomingAuraContingentSelfDamage", 201),
    ("ModifyDamageIncomingAuraContingentSelfDamageTargetAbility", 202),
    ("ConvertCorpseToPower", 203),
    ("EraseOverTime", 204),
    ("FireStreamChannel", 205),
    ("DisableMeleeAttack", 206),
    ("AbilityOnPlayer", 207),
    ("GlobalAbilityOnEntity", 208),
    ("AuraModifyCardCost", 209),
    ("AuraModifyBuildTime", 210),
    ("GlobalRotTimeModifier", 211),
    ("_212LeftoverDoesNotReallyExistButIsUsed", 212),
    ("MindControl", 213),
    ("SpellOnEntityNearby", 214),
    ("AmmoConsumeModifyIncomingDamage", 216),
    ("AmmoConsumeModifyOutgoingDamage", 217),
    ("GlobalSuppressRefund", 219),
    ("DirectRefundOnDie", 220),
    ("OutgoingDamageDependendSpell", 221),
    ("DeathCounter", 222),
    ("DeathCounterController", 223),
    ("DamageRadialAreaUsingGraveyard", 224),
    ("MovingIntervalCast", 225),
    ("BarrierGateDelay", 226),
    ("EffectHolderAmmo", 227),
    ("FightDependentAbility", 228),
    ("GlobalIgnoreCardPlayConditions", 229),
    ("WormMovement", 230),
    ("DamageRectAreaAligned", 231),
    ("GlobalRefundOnEntityDie", 232),
    ("GlobalDamageAbsorption", 233),
    ("GlobalPowerRecovermentModifier", 234),
    ("GlobalDamageAbsorptionTargetAbility", 235),
    ("OverwriteVisRange", 236),
    ("DamageOverTimeCastDepending", 237),
    ("ModifyDamageIncomingAuraContingentSelfRadialAreaDamage", 238),
    ("SuperWeaponShadow", 239),
    ("NoMeleeAgainstAir", 240),
    ("_SuperWeaponShadowDamage", 242),
    ("NoCardPlay", 243),
    ("NoClaim", 244),
    ("DamageRadialAreaAmmo", 246),
    ("PathLayerOverride", 247),
    ("ChannelBlock", 248),
    ("Polymorph", 249),
    ("Delay", 250),
    ("ModifyDamageIncomingOnFigure", 251),
    ("ImmobileRoot", 252),
    ("GlobalModifyCorpseGather", 253),
    ("AbilityDependentAbility", 254),
    ("CorpseManager", 255),
    ("DisableToken", 256),
    ("Piercing", 258),
    ("ReceiveMeleeAttacks", 259),
    ("BuildBlock", 260),
    ("PreventCardPlayAuraBuilding", 262),
    ("GraveyardDependentRecast", 263),
    ("ClaimBlock", 264),
    ("AmmoStartup", 265),
    ("DamageDistribution", 266),
    ("SwapSquadNightGuard", 267),
    ("Revive", 268),
    ("Amok", 269),
    ("NoCombat", 270),
    ("SlowDownDisabled", 271),
    ("CrowdControlTimeModifier", 272),
    ("DamageOnMeleeHit", 273),
    ("IgnoreIncomingDamageModifier", 275),
    ("BlockRevive", 278),
    ("GlobalMorphState", 279),
    ("SpecialOnTarget", 280),
    ("FleshBenderBugSwitch", 281),
    ("TimedMorph", 282),
    ("GlobalBuildTimeModifier", 283),
    ("CardBlock", 285),
    ("IceShieldRegeneration", 286),
    ("HealOverTime", 287),
    ("IceShieldTimerOffset", 288),
    ("SpellOnVanish", 289),
    ("GlobalVoidAbsorption", 290),
    ("VoidContainer", 291),
    ("ConvertCorpseToHealing", 292),
    ("OnEntitySpawn", 293),
    ("OnMorph", 294),
];

// ---------------------------------------------------------------------------
// Card templates
// ---------------------------------------------------------------------------

/// Card templates compiled into [`TemplateCatalog::builtin`], `(id, name)`.
///
/// Covers the placeholder and the cards the bundled decks use. Load a
/// full table with [`TemplateCatalog::from_json`].
///
/// [`TemplateCatalog::builtin`]: crate::TemplateCatalog::builtin
/// [`TemplateCatalog::from_json`]: crate::TemplateCatalog::from_json
pub const BUILTIN_TEMPLATES: &[(u32, &str)] = &[
    (0, "NotACard"),
    (1001, "Northguards"),
    (1002, "MasterArchers"),
    (1003, "Eruption"),
    (1004, "CannonTower"),
    (1005, "FireStalker"),
    (1006, "MagmaHurler"),
    (1007, "Tremor"),
    (1101, "Swiftclaw"),
    (1102, "DryadAFrost"),
    (1103, "Windweavers"),
    (1104, "Shaman"),
    (1105, "Spearmen"),
    (1106, "EnsnaringRoots"),
    (1107, "Hurricane"),
    (1108, "SurgeOfLight"),
    (1109, "NastySurprise"),
    (1110, "DarkelfAssassins"),
    (1111, "Nightcrawler"),
    (1112, "AmiiPaladins"),
    (1113, "AmiiPhantom"),
    (1114, "Burrower"),
    (1115, "ShadowPhoenix"),
    (1116, "AuraofCorruption"),
    (1117, "Tranquility"),
    (1118, "CurseofOink"),
    (1119, "CultistMaster"),
    (1120, "AshbonePyro"),
];
