// Copyright 2018-2022 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

table! {
    quote (id) {
        id -> BigInt,
        service_call_id -> Text,
        revision -> BigInt,
        description -> Nullable<Text>,
        customer_name -> Nullable<Text>,
        status -> Text,
        tech_count -> Nullable<BigInt>,
        tech_hours -> Nullable<Double>,
        travel_hours -> Nullable<Double>,
        tech_rate -> Nullable<Double>,
        travel_rate -> Nullable<Double>,
    }
}

table! {
    quote_line_item (id) {
        id -> BigInt,
        quote_id -> BigInt,
        part_number -> Nullable<Text>,
        description -> Nullable<Text>,
        vendor -> Nullable<Text>,
        on_hand -> Nullable<Text>,
        quantity -> Double,
        unit_cost -> Double,
        total_cost -> Double,
    }
}

table! {
    subcontractor (id) {
        id -> BigInt,
        quote_id -> BigInt,
        contact_name -> Nullable<Text>,
        contact_details -> Nullable<Text>,
        cost -> Double,
    }
}

joinable!(quote_line_item -> quote (quote_id));
joinable!(subcontractor -> quote (quote_id));

allow_tables_to_appear_in_same_query!(quote, quote_line_item, subcontractor);
