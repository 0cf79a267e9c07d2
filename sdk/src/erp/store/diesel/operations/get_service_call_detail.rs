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

use super::{missing_table_as_empty, trim, ErpStoreOperations};
use crate::erp::store::diesel::{
    models::ServiceCallDetailModel, schema::service_call_details, ErpStoreError,
};
use crate::erp::store::ServiceCallDetail;

use diesel::{prelude::*, result::Error as dsl_error};

pub(in crate::erp::store::diesel) trait ErpStoreGetServiceCallDetailOperation {
    fn get_service_call_detail(
        &self,
        service_call_id: &str,
    ) -> Result<Option<ServiceCallDetail>, ErpStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> ErpStoreGetServiceCallDetailOperation
    for ErpStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn get_service_call_detail(
        &self,
        service_call_id: &str,
    ) -> Result<Option<ServiceCallDetail>, ErpStoreError> {
        let detail = service_call_details::table
            .filter(trim(service_call_details::service_call_id).eq(service_call_id.trim()))
            .first::<ServiceCallDetailModel>(self.conn)
            .map(Some)
            .or_else(|err| {
                if err == dsl_error::NotFound {
                    Ok(None)
                } else {
                    Err(err)
                }
            });

        Ok(missing_table_as_empty(detail)?.map(ServiceCallDetail::from))
    }
}
