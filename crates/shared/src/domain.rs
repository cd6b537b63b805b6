use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);

/// Countries offered by the directory form, serialized as the short codes
/// the remote collection stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "UZB")]
    Uzbekistan,
    #[serde(rename = "USA")]
    UnitedStates,
    #[serde(rename = "UK")]
    UnitedKingdom,
    Canada,
    Australia,
    Germany,
    France,
    Japan,
    China,
    India,
    Brazil,
}

impl Country {
    pub const ALL: [Country; 11] = [
        Country::Uzbekistan,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Australia,
        Country::Germany,
        Country::France,
        Country::Japan,
        Country::China,
        Country::India,
        Country::Brazil,
    ];

    /// Short code stored by the collection and shown in the table.
    pub fn code(self) -> &'static str {
        match self {
            Country::Uzbekistan => "UZB",
            Country::UnitedStates => "USA",
            Country::UnitedKingdom => "UK",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Japan => "Japan",
            Country::China => "China",
            Country::India => "India",
            Country::Brazil => "Brazil",
        }
    }

    /// Name shown in the country dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Country::Uzbekistan => "Uzbekistan",
            other => other.code(),
        }
    }
}
