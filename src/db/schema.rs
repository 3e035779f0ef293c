//! Diesel table definitions matching the SQL schema in [`super::initialise`].

diesel::table! {
    tourist (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        passport_number -> Text,
        phone -> Nullable<Text>,
        email -> Nullable<Text>,
        date_of_birth -> Nullable<Date>,
        notes -> Nullable<Text>,
    }
}

diesel::table! {
    booking (id) {
        id -> Integer,
        tourist_id -> Integer,
        destination -> Text,
        start_date -> Date,
        end_date -> Date,
        price -> Double,
        description -> Nullable<Text>,
    }
}

diesel::joinable!(booking -> tourist (tourist_id));
diesel::allow_tables_to_appear_in_same_query!(tourist, booking);
