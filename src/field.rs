//! Closed vocabulary of line-format tags known to the mapping tables.

use std::{fmt, str::FromStr};

/// Prefix reserved for application-defined fields.
pub const APP_PREFIX: &str = "APP_";

/// Error returned when a tag name is not part of [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field tag `{0}`")]
pub struct UnknownField(pub String);

macro_rules! fields {
    ($($variant:ident => $tag:literal,)*) => {
        /// Line-format tag understood by the mapping tables.
        ///
        /// Each variant documents the exact tag it stands for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant,
            )*
        }

        impl Field {
            /// Every known tag, in vocabulary order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)*];

            /// Upper-case tag name as written on the wire.
            pub const fn tag(self) -> &'static str {
                match self {
                    $(Field::$variant => $tag,)*
                }
            }
        }

        impl FromStr for Field {
            type Err = UnknownField;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $($tag => Ok(Field::$variant),)*
                    _ => Err(UnknownField(s.to_string())),
                }
            }
        }
    };
}

fields! {
    // contact
    Band => "BAND",
    BandRx => "BAND_RX",
    Comment => "COMMENT",
    Distance => "DISTANCE",
    Freq => "FREQ",
    FreqRx => "FREQ_RX",
    Mode => "MODE",
    Notes => "NOTES",
    PublicKey => "PUBLIC_KEY",
    QsoComplete => "QSO_COMPLETE",
    QsoDate => "QSO_DATE",
    TimeOn => "TIME_ON",
    QsoDateOff => "QSO_DATE_OFF",
    TimeOff => "TIME_OFF",
    QsoRandom => "QSO_RANDOM",
    RstRcvd => "RST_RCVD",
    RstSent => "RST_SENT",
    Submode => "SUBMODE",
    Swl => "SWL",
    // contacted station
    Address => "ADDRESS",
    Age => "AGE",
    Call => "CALL",
    Cnty => "CNTY",
    Cont => "CONT",
    ContactedOp => "CONTACTED_OP",
    Country => "COUNTRY",
    Cqz => "CQZ",
    DarcDok => "DARC_DOK",
    Dxcc => "DXCC",
    Email => "EMAIL",
    EqCall => "EQ_CALL",
    Fists => "FISTS",
    FistsCc => "FISTS_CC",
    Gridsquare => "GRIDSQUARE",
    Iota => "IOTA",
    IotaIslandId => "IOTA_ISLAND_ID",
    Ituz => "ITUZ",
    Lat => "LAT",
    Lon => "LON",
    Name => "NAME",
    Pfx => "PFX",
    QslVia => "QSL_VIA",
    Qth => "QTH",
    Region => "REGION",
    Rig => "RIG",
    RxPwr => "RX_PWR",
    Sig => "SIG",
    SigInfo => "SIG_INFO",
    SilentKey => "SILENT_KEY",
    Skcc => "SKCC",
    SotaRef => "SOTA_REF",
    State => "STATE",
    TenTen => "TEN_TEN",
    Uksmg => "UKSMG",
    UsacaCounties => "USACA_COUNTIES",
    VuccGrids => "VUCC_GRIDS",
    Web => "WEB",
    // logging station
    AntAz => "ANT_AZ",
    AntEl => "ANT_EL",
    MyAntenna => "MY_ANTENNA",
    MyCity => "MY_CITY",
    MyCnty => "MY_CNTY",
    MyCountry => "MY_COUNTRY",
    MyCqZone => "MY_CQ_ZONE",
    MyDxcc => "MY_DXCC",
    MyFists => "MY_FISTS",
    MyGridsquare => "MY_GRIDSQUARE",
    MyIota => "MY_IOTA",
    MyIotaIslandId => "MY_IOTA_ISLAND_ID",
    MyItuZone => "MY_ITU_ZONE",
    MyLat => "MY_LAT",
    MyLon => "MY_LON",
    MyName => "MY_NAME",
    MyPostalCode => "MY_POSTAL_CODE",
    MyRig => "MY_RIG",
    MySig => "MY_SIG",
    MySigInfo => "MY_SIG_INFO",
    MySotaRef => "MY_SOTA_REF",
    MyState => "MY_STATE",
    MyStreet => "MY_STREET",
    MyUsacaCounties => "MY_USACA_COUNTIES",
    MyVuccGrids => "MY_VUCC_GRIDS",
    Operator => "OPERATOR",
    OwnerCallsign => "OWNER_CALLSIGN",
    StationCallsign => "STATION_CALLSIGN",
    TxPwr => "TX_PWR",
    // contest
    ContestId => "CONTEST_ID",
    ArrlSect => "ARRL_SECT",
    Class => "CLASS",
    Check => "CHECK",
    Precedence => "PRECEDENCE",
    Srx => "SRX",
    SrxString => "SRX_STRING",
    Stx => "STX",
    StxString => "STX_STRING",
    // propagation
    AIndex => "A_INDEX",
    AntPath => "ANT_PATH",
    ForceInit => "FORCE_INIT",
    KIndex => "K_INDEX",
    MaxBursts => "MAX_BURSTS",
    MsShower => "MS_SHOWER",
    NrBursts => "NR_BURSTS",
    NrPings => "NR_PINGS",
    PropMode => "PROP_MODE",
    SatMode => "SAT_MODE",
    SatName => "SAT_NAME",
    Sfi => "SFI",
    // awards and credit
    AwardSubmitted => "AWARD_SUBMITTED",
    AwardGranted => "AWARD_GRANTED",
    CreditSubmitted => "CREDIT_SUBMITTED",
    CreditGranted => "CREDIT_GRANTED",
    // uploads
    QrzcomQsoUploadStatus => "QRZCOM_QSO_UPLOAD_STATUS",
    QrzcomQsoUploadDate => "QRZCOM_QSO_UPLOAD_DATE",
    HrdlogQsoUploadStatus => "HRDLOG_QSO_UPLOAD_STATUS",
    HrdlogQsoUploadDate => "HRDLOG_QSO_UPLOAD_DATE",
    ClublogQsoUploadStatus => "CLUBLOG_QSO_UPLOAD_STATUS",
    ClublogQsoUploadDate => "CLUBLOG_QSO_UPLOAD_DATE",
    // qsl
    QslSent => "QSL_SENT",
    QslRcvd => "QSL_RCVD",
    QslSdate => "QSLSDATE",
    QslRdate => "QSLRDATE",
    QslSentVia => "QSL_SENT_VIA",
    QslRcvdVia => "QSL_RCVD_VIA",
    QslMsg => "QSLMSG",
    EqslQslSent => "EQSL_QSL_SENT",
    EqslQslRcvd => "EQSL_QSL_RCVD",
    EqslQslSdate => "EQSL_QSLSDATE",
    EqslQslRdate => "EQSL_QSLRDATE",
    LotwQslSent => "LOTW_QSL_SENT",
    LotwQslRcvd => "LOTW_QSL_RCVD",
    LotwQslSdate => "LOTW_QSLSDATE",
    LotwQslRdate => "LOTW_QSLRDATE",
}

impl Field {
    /// Returns true when `name` carries the application-defined prefix.
    pub fn is_app_defined(name: &str) -> bool {
        name.get(..APP_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(APP_PREFIX))
    }

    /// Returns true when `name` can be written as a data specifier name.
    pub fn is_writable_name(name: &str) -> bool {
        !name.is_empty()
            && !name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ':' | '<' | '>' | ',' | '{' | '}'))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.tag()
    }
}
