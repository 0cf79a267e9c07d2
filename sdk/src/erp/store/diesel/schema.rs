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

//! Mirror tables written by the ERP extraction job. Only the columns read here are declared, and
//! the SQL names follow the ERP.

table! {
    service_call_details (service_call_id) {
        #[sql_name = "SV00300_Service_Call_ID"]
        service_call_id -> Text,
        #[sql_name = "PL_CUSTNAME"]
        customer_name -> Nullable<Text>,
        #[sql_name = "BillCustomer_CUSTNAME"]
        bill_customer_name -> Nullable<Text>,
        #[sql_name = "PL_Labor_Group_Name"]
        labor_group_name -> Nullable<Text>,
        #[sql_name = "Generator_Wennsoft_Model_Number"]
        generator_model -> Nullable<Text>,
        #[sql_name = "Generator_Wennsoft_Serial_Number"]
        generator_serial -> Nullable<Text>,
        #[sql_name = "SV00400_Warranty_Expiration"]
        warranty_expiration -> Nullable<Text>,
        #[sql_name = "ATS_Wennsoft_Model_Number"]
        ats_model -> Nullable<Text>,
        #[sql_name = "ATS_Wennsoft_Serial_Number"]
        ats_serial -> Nullable<Text>,
        #[sql_name = "Engine_Wennsoft_Model_Number"]
        engine_model -> Nullable<Text>,
        #[sql_name = "Engine_Wennsoft_Serial_Number"]
        engine_serial -> Nullable<Text>,
    }
}

table! {
    sv000805_service_notes (service_call_id) {
        #[sql_name = "Service_Call_ID"]
        service_call_id -> Text,
        #[sql_name = "Record_Notes"]
        record_notes -> Nullable<Text>,
    }
}

table! {
    sv000123_overhead_groups (labor_group_name) {
        #[sql_name = "Labor_Group_Name"]
        labor_group_name -> Text,
        #[sql_name = "Billing_Amount"]
        billing_amount -> Nullable<Double>,
    }
}

table! {
    iv00102_item_quantity_all (item_number, location_code) {
        #[sql_name = "ITEMNMBR"]
        item_number -> Text,
        #[sql_name = "LOCNCODE"]
        location_code -> Text,
        #[sql_name = "QTYONHND"]
        quantity_on_hand -> Nullable<Double>,
    }
}
