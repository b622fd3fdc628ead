//! Entity data queries and response parsing.
//!
//! The server answers `data get entity` queries with fixed-format prose:
//!
//! ```text
//! Steve has the following entity data: "minecraft:torch"
//! Steve has the following entity data: [12.5d, 64.0d, -3.25d]
//! ```
//!
//! Each response kind gets an explicit parser returning a typed value or a
//! parse failure; nothing here pattern-matches blindly on raw text. Two
//! sentinels short-circuit parsing: `"No entity was found"` (the player is
//! gone, fatal for the whole run) and the `"Found no elements"` prefix
//! (the queried inventory slot is empty).

use rwa_rcon::Console;

use crate::error::BotError;

/// Exact response when the `@p` selector matches nothing.
pub const NO_ENTITY: &str = "No entity was found";
/// Prefix of the response for an empty inventory slot.
pub const NO_ELEMENTS: &str = "Found no elements";
/// Exact response for a passed `execute if block` check.
pub const TEST_PASSED: &str = "Test passed";
/// Prefix of the response for a successful `setblock`.
pub const BLOCK_CHANGED: &str = "Changed the block";

const HELD_ITEM_CMD: &str = "data get entity @p Inventory[{Slot:-106b}].id";
const DIMENSION_CMD: &str = "data get entity @p Dimension";
const POSITION_CMD: &str = "data get entity @p Pos";

/// A player's exact location. Compared with exact equality across ticks
/// to detect movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Truncate toward zero to the containing block cell.
    pub fn cell(&self) -> (i32, i32, i32) {
        (self.x as i32, self.y as i32, self.z as i32)
    }
}

/// What the player holds in the off-hand slot, or `None` if it is empty.
pub async fn held_item<C: Console>(console: &mut C) -> Result<Option<String>, BotError> {
    let res = console.command(HELD_ITEM_CMD).await?;
    parse_held_item(&res)
}

/// The dimension the player currently occupies, e.g. `minecraft:overworld`.
pub async fn dimension<C: Console>(console: &mut C) -> Result<String, BotError> {
    let res = console.command(DIMENSION_CMD).await?;
    parse_dimension(&res)
}

/// The player's exact position.
pub async fn position<C: Console>(console: &mut C) -> Result<Position, BotError> {
    let res = console.command(POSITION_CMD).await?;
    parse_position(&res)
}

pub fn parse_held_item(res: &str) -> Result<Option<String>, BotError> {
    if res == NO_ENTITY {
        return Err(BotError::PlayerAbsent { query: "held item" });
    }
    if res.starts_with(NO_ELEMENTS) {
        return Ok(None);
    }
    quoted_payload(res)
        .map(|id| Some(id.to_string()))
        .ok_or_else(|| BotError::Parse {
            kind: "held item",
            response: res.to_string(),
        })
}

pub fn parse_dimension(res: &str) -> Result<String, BotError> {
    if res == NO_ENTITY {
        return Err(BotError::PlayerAbsent { query: "dimension" });
    }
    quoted_payload(res)
        .map(str::to_string)
        .ok_or_else(|| BotError::Parse {
            kind: "dimension",
            response: res.to_string(),
        })
}

pub fn parse_position(res: &str) -> Result<Position, BotError> {
    if res == NO_ENTITY {
        return Err(BotError::PlayerAbsent { query: "position" });
    }
    let parse_err = || BotError::Parse {
        kind: "position",
        response: res.to_string(),
    };

    let start = res.find('[').ok_or_else(parse_err)?;
    let end = res.rfind(']').filter(|&end| end > start).ok_or_else(parse_err)?;
    let list = &res[start + 1..end];

    // each token is a double with a "d" suffix: "12.5d"
    let mut coords = [0.0f64; 3];
    let mut count = 0;
    for token in list.split(',') {
        if count == 3 {
            return Err(parse_err());
        }
        let token = token.trim();
        let number = token.strip_suffix('d').unwrap_or(token);
        coords[count] = number.parse().map_err(|_| parse_err())?;
        count += 1;
    }
    if count != 3 {
        return Err(parse_err());
    }

    Ok(Position {
        x: coords[0],
        y: coords[1],
        z: coords[2],
    })
}

/// Extract the double-quoted payload of an entity data response.
fn quoted_payload(res: &str) -> Option<&str> {
    let start = res.find('"')?;
    let end = res.rfind('"')?;
    if end <= start {
        return None;
    }
    Some(&res[start + 1..end])
}
