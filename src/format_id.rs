//! Format identifiers.
//!
//! [`FormatId`] is the closed set of masks the engine knows about. Each
//! identifier has a stable kebab-case tag (`"cpf"`, `"phone-us"`, ...) used by
//! the CLI, the HTTP API and the JS bindings, a human-readable name, and the
//! [`Region`] it is listed under.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Grouping used when listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Brazilian documents, phones and dates.
    Brazil,
    /// United States documents, phones and dates.
    UnitedStates,
    /// European national identifiers, phones and dates.
    Europe,
    /// Latin American identifiers and phones.
    LatinAmerica,
    /// Asian identifiers and phones.
    Asia,
    /// Canada, Australia, South Africa, Russia, Turkey, Israel.
    OtherCountries,
    /// Cards, bank codes, book numbers, network addresses, barcodes.
    Universal,
    /// Money amounts.
    Currency,
    /// Clock times.
    Time,
}

impl Region {
    /// Returns a human-readable name for the region.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Brazil => "Brazil",
            Self::UnitedStates => "United States",
            Self::Europe => "Europe",
            Self::LatinAmerica => "Latin America",
            Self::Asia => "Asia",
            Self::OtherCountries => "Other countries",
            Self::Universal => "Universal",
            Self::Currency => "Currency",
            Self::Time => "Time",
        }
    }
}

impl Region {
    /// All regions, in listing order.
    pub const ALL: &'static [Region] = &[
        Self::Brazil,
        Self::UnitedStates,
        Self::Europe,
        Self::LatinAmerica,
        Self::Asia,
        Self::OtherCountries,
        Self::Universal,
        Self::Currency,
        Self::Time,
    ];

    /// Returns the kebab-case tag, e.g. `"latin-america"`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Brazil => "brazil",
            Self::UnitedStates => "united-states",
            Self::Europe => "europe",
            Self::LatinAmerica => "latin-america",
            Self::Asia => "asia",
            Self::OtherCountries => "other-countries",
            Self::Universal => "universal",
            Self::Currency => "currency",
            Self::Time => "time",
        }
    }

    /// Looks up a region by its tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! format_ids {
    ($($variant:ident => $tag:literal, $name:literal, $region:ident;)+) => {
        /// Every mask the engine supports.
        ///
        /// The declaration order is the order of the rule table and of
        /// [`FormatId::ALL`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FormatId {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl FormatId {
            /// All identifiers, in rule-table order.
            pub const ALL: &'static [FormatId] = &[$(Self::$variant),+];

            /// Number of supported formats.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the kebab-case tag, e.g. `"phone-us"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }

            /// Returns a human-readable name for the format.
            #[inline]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns the region the format is listed under.
            #[inline]
            pub const fn region(&self) -> Region {
                match self {
                    $(Self::$variant => Region::$region,)+
                }
            }

            /// Looks up an identifier by its tag.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

format_ids! {
    Cpf => "cpf", "CPF (Brazilian taxpayer number)", Brazil;
    Rg => "rg", "RG (Brazilian identity card)", Brazil;
    Cnpj => "cnpj", "CNPJ (Brazilian company number)", Brazil;
    Cep => "cep", "CEP (Brazilian postal code)", Brazil;
    PhoneBr => "phone-br", "Brazilian phone number", Brazil;
    DateBr => "date-br", "Brazilian date (DD/MM/YYYY)", Brazil;
    DateBrShort => "date-br-short", "Brazilian short date (DD/MM/YYYY)", Brazil;
    DateBrFull => "date-br-full", "Brazilian long date (DD de Mês de YYYY)", Brazil;

    Ssn => "ssn", "US Social Security number", UnitedStates;
    PhoneUs => "phone-us", "US phone number", UnitedStates;
    DateUs => "date-us", "US date (MM/DD/YYYY)", UnitedStates;
    DateUsShort => "date-us-short", "US short date (MM/DD/YYYY)", UnitedStates;
    DateUsFull => "date-us-full", "US long date (Month DD, YYYY)", UnitedStates;
    DriversLicenseUs => "drivers-license-us", "US driver's license", UnitedStates;

    NifEs => "nif-es", "NIF (Spain)", Europe;
    NifPt => "nif-pt", "NIF (Portugal)", Europe;
    NieEs => "nie-es", "NIE (Spain)", Europe;
    NirFr => "nir-fr", "NIR (France)", Europe;
    SteuerIdDe => "steuer-id-de", "Steuer-ID (Germany)", Europe;
    CodiceFiscaleIt => "codice-fiscale-it", "Codice fiscale (Italy)", Europe;
    NinoUk => "nino-uk", "National Insurance number (United Kingdom)", Europe;
    BsnNl => "bsn-nl", "BSN (Netherlands)", Europe;
    NissBe => "niss-be", "NISS (Belgium)", Europe;
    AvsCh => "avs-ch", "AVS/AHV (Switzerland)", Europe;
    SvnrAt => "svnr-at", "SVNR (Austria)", Europe;
    PersonnummerSe => "personnummer-se", "Personnummer (Sweden)", Europe;
    FodselsnummerNo => "fodselsnummer-no", "Fødselsnummer (Norway)", Europe;
    PeselPl => "pesel-pl", "PESEL (Poland)", Europe;
    AmkaGr => "amka-gr", "AMKA (Greece)", Europe;
    PassportEu => "passport-eu", "European passport number", Europe;
    DateEu => "date-eu", "European date (DD/MM/YYYY)", Europe;
    DateEuShort => "date-eu-short", "European short date (DD/MM/YYYY)", Europe;
    DateEuFull => "date-eu-full", "European long date (DD Month YYYY)", Europe;
    PhoneEu => "phone-eu", "European phone number", Europe;

    CurpMx => "curp-mx", "CURP (Mexico)", LatinAmerica;
    RfcMx => "rfc-mx", "RFC (Mexico)", LatinAmerica;
    CuitAr => "cuit-ar", "CUIT (Argentina)", LatinAmerica;
    CuitCuilAr => "cuit-cuil-ar", "CUIT/CUIL (Argentina)", LatinAmerica;
    DniAr => "dni-ar", "DNI (Argentina)", LatinAmerica;
    RutCl => "rut-cl", "RUT (Chile)", LatinAmerica;
    NitCo => "nit-co", "NIT (Colombia)", LatinAmerica;
    CcCo => "cc-co", "Cédula de ciudadanía (Colombia)", LatinAmerica;
    DniPe => "dni-pe", "DNI (Peru)", LatinAmerica;
    RucPe => "ruc-pe", "RUC (Peru)", LatinAmerica;
    CiVe => "ci-ve", "Cédula de identidad (Venezuela)", LatinAmerica;
    CiEc => "ci-ec", "Cédula de identidad (Ecuador)", LatinAmerica;
    CiUy => "ci-uy", "Cédula de identidad (Uruguay)", LatinAmerica;
    CiPy => "ci-py", "Cédula de identidad (Paraguay)", LatinAmerica;
    CiBo => "ci-bo", "Cédula de identidad (Bolivia)", LatinAmerica;
    PhoneMx => "phone-mx", "Mexican phone number", LatinAmerica;
    PhoneAr => "phone-ar", "Argentine phone number", LatinAmerica;
    PhoneCl => "phone-cl", "Chilean phone number", LatinAmerica;
    PhoneCo => "phone-co", "Colombian phone number", LatinAmerica;

    MyNumberJp => "my-number-jp", "My Number (Japan)", Asia;
    IdCardCn => "id-card-cn", "Resident identity card (China)", Asia;
    AadhaarIn => "aadhaar-in", "Aadhaar (India)", Asia;
    PanIn => "pan-in", "PAN (India)", Asia;
    PhoneJp => "phone-jp", "Japanese phone number", Asia;
    PhoneCn => "phone-cn", "Chinese phone number", Asia;
    PhoneIn => "phone-in", "Indian phone number", Asia;

    SinCa => "sin-ca", "SIN (Canada)", OtherCountries;
    TfnAu => "tfn-au", "TFN (Australia)", OtherCountries;
    AbnAu => "abn-au", "ABN (Australia)", OtherCountries;
    IdZa => "id-za", "Identity number (South Africa)", OtherCountries;
    PhoneCa => "phone-ca", "Canadian phone number", OtherCountries;
    PhoneAu => "phone-au", "Australian phone number", OtherCountries;

    CreditCard => "credit-card", "Payment card number", Universal;
    Iban => "iban", "IBAN", Universal;
    SwiftBic => "swift-bic", "SWIFT/BIC code", Universal;
    Isbn10 => "isbn-10", "ISBN-10", Universal;
    Isbn13 => "isbn-13", "ISBN-13", Universal;
    Uuid => "uuid", "UUID", Universal;
    MacAddress => "mac-address", "MAC address", Universal;
    Ipv4 => "ipv4", "IPv4 address", Universal;
    Ipv6 => "ipv6", "IPv6 address", Universal;
    Ean13 => "ean-13", "EAN-13 barcode", Universal;
    UpcA => "upc-a", "UPC-A barcode", Universal;

    CurrencyBr => "currency-br", "Brazilian real amount", Currency;
    CurrencyUs => "currency-us", "US dollar amount", Currency;
    CurrencyEu => "currency-eu", "Euro amount", Currency;

    Time24h => "time-24h", "24-hour time (HH:MM:SS)", Time;
    Time12h => "time-12h", "12-hour time (HH:MM AM/PM)", Time;

    SnilsRu => "snils-ru", "SNILS (Russia)", OtherCountries;
    TcKimlikTr => "tc-kimlik-tr", "T.C. Kimlik No (Turkey)", OtherCountries;
    TeudatZehutIl => "teudat-zehut-il", "Teudat Zehut (Israel)", OtherCountries;
}

impl FormatId {
    /// Iterates over the formats listed under `region`.
    pub fn in_region(region: Region) -> impl Iterator<Item = FormatId> {
        Self::ALL.iter().copied().filter(move |id| id.region() == region)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatId {
    type Err = FormatError;

    /// Parses a tag. Surrounding whitespace and ASCII case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_tag(trimmed)
            .or_else(|| Self::from_tag(&trimmed.to_ascii_lowercase()))
            .ok_or_else(|| FormatError::UnknownFormat { id: s.to_string() })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormatId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FormatId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
