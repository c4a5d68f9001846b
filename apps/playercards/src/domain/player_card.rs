use serde::{Deserialize, Serialize};

/// One row of the `playercards` table
///
/// Every value is copied verbatim from the database. Ratings are stored as
/// text, and goalkeeper columns (`div`, `pos`, `han`, `reff`, `kic`, `spd`)
/// hold `"NA"` on outfield cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerCard {
    pub playerid: i32,
    pub playername: String,
    pub foot: String,
    pub playerposition: String,
    /// Attacking work rate
    pub awr: String,
    /// Defensive work rate
    pub dwr: String,
    pub ovr: String,
    pub pac: String,
    pub sho: String,
    pub pas: String,
    pub dri: String,
    pub def: String,
    pub phy: String,
    /// Skill moves
    pub sm: String,
    pub div: String,
    pub pos: String,
    pub han: String,
    pub reff: String,
    pub kic: String,
    pub spd: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_from_column_named_json() {
        let card: PlayerCard = serde_json::from_value(json!({
            "playerid": 1,
            "playername": "Pelé",
            "foot": "Right",
            "playerposition": "CAM",
            "awr": "High",
            "dwr": "Med",
            "ovr": "98",
            "pac": "95",
            "sho": "96",
            "pas": "93",
            "dri": "96",
            "def": "60",
            "phy": "76",
            "sm": "5",
            "div": "NA",
            "pos": "NA",
            "han": "NA",
            "reff": "NA",
            "kic": "NA",
            "spd": "NA"
        }))
        .expect("valid card json");

        assert_eq!(card.playerid, 1);
        assert_eq!(card.playername, "Pelé");
        assert_eq!(card.ovr, "98");
        assert_eq!(card.reff, "NA");
    }

    #[test]
    fn serializes_with_column_names_as_keys() {
        let card = PlayerCard {
            playerid: 7,
            playername: "Gianluigi Buffon".to_string(),
            foot: "Right".to_string(),
            playerposition: "GK".to_string(),
            awr: "Med".to_string(),
            dwr: "Med".to_string(),
            ovr: "94".to_string(),
            pac: "NA".to_string(),
            sho: "NA".to_string(),
            pas: "NA".to_string(),
            dri: "NA".to_string(),
            def: "NA".to_string(),
            phy: "NA".to_string(),
            sm: "1".to_string(),
            div: "92".to_string(),
            pos: "95".to_string(),
            han: "90".to_string(),
            reff: "93".to_string(),
            kic: "78".to_string(),
            spd: "60".to_string(),
        };

        let value = serde_json::to_value(&card).expect("serialize card");
        assert_eq!(value["playerid"], 7);
        assert_eq!(value["playerposition"], "GK");
        assert_eq!(value["reff"], "93");
    }
}
