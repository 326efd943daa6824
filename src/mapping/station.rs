use super::FieldTable;
use crate::{
    codec::{Flag, Latitude, Longitude, Power, Signed, Text, Unsigned},
    field::Field,
    qso::{Qso, Station},
    record::Record,
};

field_table! {
    /// The contacted station: plain tags.
    pub ContactedStation: Station {
        Address => address as Text,
        Age => age as Unsigned,
        Call => station_call as Text,
        Cnty => county as Text,
        Cont => continent as Text,
        ContactedOp => op_call as Text,
        Country => country as Text,
        Cqz => cq_zone as Unsigned,
        DarcDok => darc_dok as Text,
        Dxcc => dxcc as Unsigned,
        Email => email as Text,
        EqCall => owner_call as Text,
        Fists => fists as Unsigned,
        FistsCc => fists_cc as Unsigned,
        Gridsquare => grid_square as Text,
        Iota => iota as Text,
        IotaIslandId => iota_island_id as Unsigned,
        Ituz => itu_zone as Unsigned,
        Lat => latitude as Latitude,
        Lon => longitude as Longitude,
        Name => op_name as Text,
        Pfx => pfx as Text,
        QslVia => qsl_via as Text,
        Qth => city as Text,
        Region => region as Text,
        Rig => rig as Text,
        RxPwr => power as Power,
        Sig => sig as Text,
        SigInfo => sig_info as Text,
        SilentKey => silent_key as Flag,
        Skcc => skcc as Text,
        SotaRef => sota_ref as Text,
        State => state as Text,
        TenTen => ten_ten as Unsigned,
        Uksmg => uksmg as Unsigned,
        UsacaCounties => usaca_counties as Text,
        VuccGrids => vucc_grids as Text,
        Web => web as Text,
    }
}

field_table! {
    /// The logging station: `MY_` tags plus a few unprefixed ones.
    pub LoggingStation: Station {
        AntAz => antenna_azimuth as Signed,
        AntEl => antenna_elevation as Signed,
        MyAntenna => antenna as Text,
        MyCity => city as Text,
        MyCnty => county as Text,
        MyCountry => country as Text,
        MyCqZone => cq_zone as Unsigned,
        MyDxcc => dxcc as Unsigned,
        MyFists => fists as Unsigned,
        MyGridsquare => grid_square as Text,
        MyIota => iota as Text,
        MyIotaIslandId => iota_island_id as Unsigned,
        MyItuZone => itu_zone as Unsigned,
        MyLat => latitude as Latitude,
        MyLon => longitude as Longitude,
        MyName => op_name as Text,
        MyPostalCode => postal_code as Text,
        MyRig => rig as Text,
        MySig => sig as Text,
        MySigInfo => sig_info as Text,
        MySotaRef => sota_ref as Text,
        MyState => state as Text,
        MyStreet => street as Text,
        MyUsacaCounties => usaca_counties as Text,
        MyVuccGrids => vucc_grids as Text,
        Operator => op_call as Text,
        OwnerCallsign => owner_call as Text,
        StationCallsign => station_call as Text,
        TxPwr => power as Power,
    }
}

pub(crate) fn read(record: &Record, qso: &mut Qso) {
    qso.contacted_station = Some(read_station::<ContactedStation>(record));
    qso.logging_station = Some(read_station::<LoggingStation>(record));
}

pub(crate) fn write(qso: &Qso, record: &mut Record) {
    if let Some(station) = &qso.contacted_station {
        ContactedStation::write(station, record);
    }
    if let Some(station) = &qso.logging_station {
        LoggingStation::write(station, record);
    }
}

pub(crate) fn check(record: &Record, invalid: &mut Vec<Field>) {
    ContactedStation::check(record, invalid);
    LoggingStation::check(record, invalid);
}

fn read_station<T: FieldTable<Target = Station>>(record: &Record) -> Station {
    let mut station = Station::default();
    T::read(record, &mut station);
    station
}
